//! Yearly predictions: a fixed 10-year forward window.

use serde::Serialize;

use primbon_rand::{SeededRandom, hash_seed};

use crate::bazi::BaZiResult;
use crate::weton::WetonResult;
use crate::zodiac::WesternZodiac;

use super::advice::{AdviceItem, generate_yearly_advice};
use super::risk::{MisfortuneIndex, generate_misfortune_index};
use super::{ALL_CATEGORIES, DomainPrediction, PredictionCategory, dedup_preserving};

/// One year's outlook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyPrediction {
    pub year: i32,
    pub age: i32,
    pub overall_theme: &'static str,
    pub domains: Vec<DomainPrediction>,
    /// Up to three months (deduplicated), ascending.
    pub lucky_months: Vec<i32>,
    /// Up to two months not already lucky, ascending.
    pub challenge_months: Vec<i32>,
    pub key_advice: &'static str,
    pub misfortune: MisfortuneIndex,
    pub advice_items: Vec<AdviceItem>,
}

const YEAR_THEMES: [&str; 10] = [
    "A Year of New Beginnings",
    "A Year of Building Foundations",
    "A Year of Creative Expression",
    "A Year of Stability & Structure",
    "A Year of Freedom & Change",
    "A Year of Love & Responsibility",
    "A Year of Inner Reflection",
    "A Year of Power & Achievement",
    "A Year of Humanitarian Purpose",
    "A Year of Completion & Renewal",
];

const TITLES: [&str; 6] = [
    "Fortune & Luck",
    "Wealth & Finances",
    "Soulmate & Romance",
    "Social & Family",
    "Vitality & Health",
    "Personal Growth",
];

const KEY_ADVICE: [&str; 5] = [
    "This year rewards those who lead with courage and compassion in equal measure.",
    "Focus on what you can control and release attachment to outcomes beyond your influence.",
    "The universe conspires in favor of those who align their actions with their deepest values.",
    "Transformation is not always comfortable, but it is always purposeful. Trust the process.",
    "Your greatest growth this year comes from the intersection of discipline and creativity.",
];

const DOMAIN_ADVICE: [&str; 6] = [
    "Stay open to unexpected turns — they often lead to the best destinations.",
    "Balance planning with spontaneity for optimal results this year.",
    "Seek guidance from trusted mentors during pivotal moments.",
    "Your intuition is especially sharp — trust it when logic falls short.",
    "Invest in relationships that challenge and inspire your growth.",
    "Practice gratitude daily — it amplifies positive cosmic energy.",
];

fn summaries_for(
    category: PredictionCategory,
    year: i32,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
) -> Vec<String> {
    let statics: [&str; 4];
    let first: String;
    match category {
        PredictionCategory::Fortune => {
            first = format!(
                "In {year}, fortune smiles upon bold initiatives. Your {} energy aligns with cosmic currents favoring decisive action.",
                zodiac.sign.name()
            );
            statics = [
                "A year where patience is rewarded. Subtle opportunities emerge for those who remain vigilant and prepared.",
                "Dynamic shifts in fortune create exciting possibilities. Embrace uncertainty as the doorway to remarkable outcomes.",
                "Collaborative luck dominates — your fortune multiplies when shared with aligned partners and communities.",
                "An auspicious year for long-term investments of time, energy, and resources. Plant seeds that will bear fruit for years.",
            ];
        }
        PredictionCategory::Wealth => {
            first = format!(
                "Financial prospects strengthen through disciplined planning. Your {} energy supports steady wealth accumulation.",
                bazi.day_master.name()
            );
            statics = [
                "Unexpected income sources may appear. Stay open to unconventional opportunities while maintaining fiscal prudence.",
                "A year of financial consolidation. Focus on reducing liabilities and strengthening your financial foundations.",
                "Investment in skills and education pays outsized dividends. Your knowledge becomes your most valuable asset.",
                "Entrepreneurial opportunities shine brightly. Your unique perspective can unlock previously untapped revenue streams.",
            ];
        }
        PredictionCategory::Soulmate => {
            first = "Romantic energy intensifies. Existing relationships deepen through honest communication and shared experiences.".to_string();
            statics = [
                "New connections carry profound potential. Pay attention to people who enter your life during transitional moments.",
                "A year for healing old relationship wounds. Forgiveness and self-love create space for authentic partnership.",
                "Adventure and spontaneity revitalize your love life. Break routine to discover deeper layers of connection.",
                "Commitment and devotion are highlighted. Meaningful gestures of loyalty strengthen your most important bonds.",
            ];
        }
        PredictionCategory::Social => {
            first = "Your social network expands in meaningful ways. Quality connections form through professional and creative communities.".to_string();
            statics = [
                "Family bonds require nurturing attention. Prioritizing home life brings unexpected joys and strengthened ties.",
                "A natural leadership role emerges within your social circles. Your guidance is sought and your influence grows.",
                "Cross-cultural connections enrich your perspective. Friendships with diverse backgrounds broaden your worldview.",
                "A year for deepening existing friendships. Vulnerability and authenticity create unbreakable bonds of trust.",
            ];
        }
        PredictionCategory::Vitality => {
            first = "Energy levels are strong. Channel this vitality into physical activities that bring both fitness and joy.".to_string();
            statics = [
                "Focus on mental wellness alongside physical health. Mindfulness practices become especially valuable this year.",
                "A year of robust health supported by positive lifestyle changes. Small daily habits compound into significant well-being.",
                "Pay attention to rest and recovery. Your body communicates its needs — listening carefully prevents burnout.",
                "Vitality surges through creative expression. Artistic pursuits and hobbies significantly boost overall well-being.",
            ];
        }
        PredictionCategory::Personality => {
            first = "Personal growth accelerates through challenges that build character. Embrace discomfort as your greatest teacher.".to_string();
            statics = [
                "Self-awareness deepens significantly. Journaling, meditation, or therapy unlock transformative personal insights.",
                "Your authentic self emerges more strongly. Others notice and appreciate the genuine confidence you radiate.",
                "A year of integrating past lessons into present wisdom. Your maturity and insight reach new heights.",
                "Creative self-expression becomes a vehicle for profound personal transformation and identity refinement.",
            ];
        }
    }
    let mut pool = vec![first];
    pool.extend(statics.iter().map(|s| (*s).to_string()));
    pool
}

/// Generate the 10-year forward window starting at `current_year`.
///
/// Per-domain text comes from a local stream seeded by
/// `"{year}-{category}-{day master}-{weton}"`; the outer stream draws only
/// the lucky/challenge months and the key advice for each year.
pub fn generate_yearly_predictions(
    rng: &mut SeededRandom,
    birth_year: i32,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
    weton: &WetonResult,
    current_year: i32,
) -> Vec<YearlyPrediction> {
    let mut predictions = Vec::with_capacity(10);

    for i in 0..10 {
        let year = current_year + i;
        let age = year - birth_year;
        let theme_idx = (i64::from(year) + i64::from(hash_seed(bazi.day_master.name())))
            .rem_euclid(YEAR_THEMES.len() as i64) as usize;

        let domains: Vec<DomainPrediction> = ALL_CATEGORIES
            .iter()
            .enumerate()
            .map(|(ci, &category)| {
                let seed = hash_seed(&format!(
                    "{year}-{}-{}-{}",
                    category.key(),
                    bazi.day_master.name(),
                    weton.weton
                ));
                let mut local = SeededRandom::new(seed);
                let score = local.next_int(4, 10);
                let pool = summaries_for(category, year, bazi, zodiac);
                let summary = pool[local.next_int(0, pool.len() as i32 - 1) as usize].clone();
                let title = TITLES[ci];
                DomainPrediction {
                    category,
                    icon: category.icon(),
                    title,
                    summary,
                    details: format!(
                        "The {} element interacts with {year}'s cosmic energy to shape your {} trajectory. Your Weton ({}) adds a layer of Javanese wisdom to this prediction.",
                        bazi.day_master.name(),
                        title.to_lowercase(),
                        weton.weton
                    ),
                    score,
                    advice: *local.pick(&DOMAIN_ADVICE),
                }
            })
            .collect();

        let mut lucky: Vec<i32> = (0..3).map(|_| rng.next_int(1, 12)).collect();
        lucky.sort_unstable();
        let drawn: Vec<i32> = (0..2).map(|_| rng.next_int(1, 12)).collect();
        let mut challenge: Vec<i32> = drawn.into_iter().filter(|m| !lucky.contains(m)).collect();
        challenge.sort_unstable();

        predictions.push(YearlyPrediction {
            year,
            age,
            overall_theme: YEAR_THEMES[theme_idx],
            domains,
            lucky_months: dedup_preserving(lucky),
            challenge_months: dedup_preserving(challenge),
            key_advice: *rng.pick(&KEY_ADVICE),
            misfortune: generate_misfortune_index(year, bazi, weton, zodiac),
            advice_items: generate_yearly_advice(year, bazi, zodiac, weton),
        });
    }

    predictions
}
