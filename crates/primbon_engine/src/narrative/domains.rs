//! Core life-domain predictions for the top of a reading.

use primbon_rand::SeededRandom;

use crate::bazi::BaZiResult;
use crate::weton::WetonResult;
use crate::zodiac::WesternZodiac;

use super::{ALL_CATEGORIES, DomainPrediction};

const TITLES: [&str; 6] = [
    "Fortune & Luck",
    "Wealth & Finances",
    "Soulmate & Romance",
    "Social & Family",
    "Vitality & Milestones",
    "Core Personality",
];

const FORTUNE_SUMMARIES: [&str; 5] = [
    "The stars align favorably for you. A natural aura of fortune surrounds your endeavors, drawing serendipitous encounters and timely opportunities.",
    "Fortune flows to you through perseverance. While not always immediately apparent, your luck compounds over time, rewarding patience and consistent effort.",
    "A dynamic fortune pattern marks your life. Peaks and valleys teach resilience, but the overall trajectory trends strongly upward across the decades.",
    "Your fortune is deeply tied to your relationships. Collaborative ventures and generous partnerships unlock your greatest opportunities.",
    "An unconventional path to fortune defines your journey. What others might see as setbacks become your stepping stones to extraordinary outcomes.",
];

const WEALTH_SUMMARIES: [&str; 5] = [
    "Multiple income streams are favored in your chart. Diversification and early investment in knowledge-based assets yield the strongest returns over your lifetime.",
    "Property, real estate, and tangible assets are your strongest wealth vehicles. Your chart favors slow, steady accumulation over speculative gains.",
    "Your creative talents are your greatest financial asset. Monetizing your unique skills and vision leads to both fulfillment and prosperity.",
    "Financial discipline is your superpower. Budgeting and strategic planning turn modest beginnings into substantial long-term wealth.",
    "Entrepreneurial energy runs strong. Your ability to spot market gaps and take calculated risks drives significant wealth creation.",
];

const SOULMATE_SUMMARIES: [&str; 5] = [
    "A profound soul connection awaits you. Your ideal partner shares your intellectual curiosity and emotional depth, creating a bond that transcends the ordinary.",
    "Romance enters your life through shared passions or creative pursuits. Look for someone who challenges you to grow while providing unwavering support.",
    "Your soulmate journey involves deep self-discovery first. Once you embrace your authentic self, the right partner appears as if drawn by cosmic magnetism.",
    "A warm, nurturing partnership is your destiny. Your ideal match values family, stability, and building a beautiful life together with shared purpose.",
    "An electrifying, passionate connection defines your romantic destiny. Your partner complements your energy and inspires your highest potential.",
];

const SOCIAL_SUMMARIES: [&str; 5] = [
    "You are a natural community builder. Your warmth and genuine interest in others create a wide, loyal social network that supports you throughout life.",
    "Quality over quantity defines your social world. A small circle of deeply trusted companions provides more fulfillment than any crowd ever could.",
    "Family bonds are your bedrock. Investing in familial relationships brings the deepest satisfaction and creates generational positive impact.",
    "Your diplomatic nature makes you the mediator and peacekeeper. Social harmony follows you, and your presence elevates any group dynamic.",
    "An expansive social vision connects you with diverse communities. Cross-cultural friendships and professional networks enrich your life profoundly.",
];

const VITALITY_SUMMARIES: [&str; 5] = [
    "A strong vitality signature in your chart suggests robust health and long-term endurance. Key milestones cluster around periods of personal transformation and renewal.",
    "Your energy flows in cycles. High-output periods require deliberate rest and recovery. Honoring these rhythms maximizes both longevity and quality of life.",
    "Mind-body connection is central to your vitality. Practices that integrate mental clarity with physical strength — like yoga or tai chi — are especially beneficial.",
    "Your chart indicates strong regenerative capacity. You bounce back from challenges with remarkable resilience, growing stronger through each experience.",
    "A focus on preventive wellness serves you best. Early adoption of healthy habits compounds into extraordinary vitality in your later decades.",
];

const DETAIL_TEMPLATES: [&str; 3] = [
    "Your {element} energy interacts with {zodiac} influences to create a {adj} trajectory. The Javanese Neptu score of {neptu} further amplifies this energy, suggesting {outcome}. Trust in the cosmic timing of your life events.",
    "Drawing from {system}, your path reveals layers of {adj} potential. The interplay between your Four Pillars and Weton ({weton}) creates a unique energetic signature that guides you toward {outcome}.",
    "Multiple divination systems converge on this reading. Your {zodiac} nature, {element} Day Master, and Weton of {weton} all point toward {outcome}. This alignment is rare and significant.",
];

const ADJECTIVES: [&str; 6] = [
    "remarkable",
    "transformative",
    "powerful",
    "auspicious",
    "dynamic",
    "profound",
];

const OUTCOMES: [&str; 5] = [
    "periods of extraordinary growth and fulfillment",
    "deep connections that shape your legacy",
    "breakthroughs that redefine your trajectory",
    "harmony between ambition and contentment",
    "a life rich in both material and spiritual wealth",
];

const SYSTEMS: [&str; 3] = ["your BaZi chart", "the Saju Palja system", "Primbon wisdom"];

const ADVICE_POOL: [&str; 6] = [
    "Trust the process and remain patient. The cosmic wheels turn in your favor.",
    "Embrace change fearlessly — it is the universe reshaping your path for the better.",
    "Balance ambition with gratitude. Acknowledging blessings multiplies them.",
    "Seek wisdom from mentors and ancient practices. Your path benefits from guided growth.",
    "Invest in self-knowledge. Understanding your patterns unlocks your highest potential.",
    "Stay grounded during peaks and resilient during valleys. Both are temporary and purposeful.",
];

fn personality_summaries(bazi: &BaZiResult, zodiac: &WesternZodiac) -> Vec<String> {
    let sign = zodiac.sign.name();
    let dm = bazi.day_master.name();
    let two_traits = zodiac.traits[..2].join(" and ").to_lowercase();
    vec![
        format!(
            "As a {sign} with {dm} as your Day Master, you blend {two_traits} nature with {} element wisdom. This rare combination makes you both visionary and grounded.",
            dm.to_lowercase()
        ),
        format!(
            "Your {} zodiac energy harmonizes with your {dm} Day Master to create a personality of remarkable depth. You navigate life with both intuition and logic in equal measure.",
            zodiac.element.name()
        ),
        format!(
            "The fusion of {sign}'s {} energy and {dm}'s elemental force gives you a unique edge. You see opportunities others miss and act with confident precision.",
            zodiac.quality.name().to_lowercase()
        ),
        format!(
            "With {sign}'s {} nature amplified by {dm} element energy, your personality is both magnetic and substantial. People are drawn to your authentic presence.",
            zodiac.traits[0].to_lowercase()
        ),
        format!(
            "Your personality is a tapestry woven from {sign}'s cosmic influence and {dm}'s elemental power. This blend creates someone who is simultaneously a dreamer and a doer.",
        ),
    ]
}

/// Generate the six core-domain predictions.
///
/// Draws, per category: summary index, detail index, adjective, outcome,
/// system name, advice, score.
pub fn generate_core_domains(
    rng: &mut SeededRandom,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
    weton: &WetonResult,
) -> Vec<DomainPrediction> {
    let static_pool = |arr: &[&'static str; 5]| -> Vec<String> {
        arr.iter().map(|s| (*s).to_string()).collect()
    };
    let pools: [Vec<String>; 6] = [
        static_pool(&FORTUNE_SUMMARIES),
        static_pool(&WEALTH_SUMMARIES),
        static_pool(&SOULMATE_SUMMARIES),
        static_pool(&SOCIAL_SUMMARIES),
        static_pool(&VITALITY_SUMMARIES),
        personality_summaries(bazi, zodiac),
    ];

    ALL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let pool = &pools[i];
            let summary_idx = rng.next_int(0, pool.len() as i32 - 1) as usize;
            let detail_idx = rng.next_int(0, DETAIL_TEMPLATES.len() as i32 - 1) as usize;
            let adj = *rng.pick(&ADJECTIVES);
            let outcome = *rng.pick(&OUTCOMES);
            let system = *rng.pick(&SYSTEMS);

            let details = DETAIL_TEMPLATES[detail_idx]
                .replace("{element}", bazi.day_master.name())
                .replace("{zodiac}", zodiac.sign.name())
                .replace("{adj}", adj)
                .replace("{neptu}", &weton.total_neptu.to_string())
                .replace("{weton}", &weton.weton)
                .replace("{outcome}", outcome)
                .replace("{system}", system);

            let advice = *rng.pick(&ADVICE_POOL);
            DomainPrediction {
                category,
                icon: category.icon(),
                title: TITLES[i],
                summary: pool[summary_idx].clone(),
                details,
                score: rng.next_int(5, 10),
                advice,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::bazi::calculate_bazi;
    use crate::narrative::PredictionCategory;
    use crate::weton::calculate_weton;

    fn fixtures() -> (BaZiResult, WesternZodiac, WetonResult) {
        let date = NaiveDate::from_ymd_opt(1990, 5, 14).unwrap();
        let mut rng = SeededRandom::new(1);
        (
            calculate_bazi(date, 14, &mut rng),
            WesternZodiac::for_month_day(5, 14),
            calculate_weton(date),
        )
    }

    #[test]
    fn six_domains_in_category_order() {
        let (bazi, zodiac, weton) = fixtures();
        let mut rng = SeededRandom::new(673_268_193);
        let domains = generate_core_domains(&mut rng, &bazi, &zodiac, &weton);
        assert_eq!(domains.len(), 6);
        assert_eq!(domains[0].category, PredictionCategory::Fortune);
        assert_eq!(domains[5].category, PredictionCategory::Personality);
        assert_eq!(domains[5].title, "Core Personality");
    }

    #[test]
    fn scores_in_five_to_ten() {
        let (bazi, zodiac, weton) = fixtures();
        for seed in [1u32, 99, 12345, 673_268_193] {
            let mut rng = SeededRandom::new(seed);
            for d in generate_core_domains(&mut rng, &bazi, &zodiac, &weton) {
                assert!((5..=10).contains(&d.score));
            }
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let (bazi, zodiac, weton) = fixtures();
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        assert_eq!(
            generate_core_domains(&mut a, &bazi, &zodiac, &weton),
            generate_core_domains(&mut b, &bazi, &zodiac, &weton)
        );
    }

    #[test]
    fn details_substitute_all_placeholders() {
        let (bazi, zodiac, weton) = fixtures();
        let mut rng = SeededRandom::new(7);
        for d in generate_core_domains(&mut rng, &bazi, &zodiac, &weton) {
            assert!(!d.details.contains('{'), "unsubstituted: {}", d.details);
        }
    }

    #[test]
    fn personality_summary_mentions_sign_or_day_master() {
        let (bazi, zodiac, weton) = fixtures();
        let mut rng = SeededRandom::new(5);
        let domains = generate_core_domains(&mut rng, &bazi, &zodiac, &weton);
        let p = &domains[5].summary;
        assert!(p.contains("Taurus") || p.contains("Earth"), "{p}");
    }
}
