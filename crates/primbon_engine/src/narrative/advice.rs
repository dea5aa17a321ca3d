//! Actionable advice items (yearly) and strategies (decade).

use serde::Serialize;

use primbon_rand::{SeededRandom, hash_seed};

use crate::bazi::BaZiResult;
use crate::weton::WetonResult;
use crate::zodiac::WesternZodiac;

/// Advice domains, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceDomain {
    Wealth,
    Love,
    Social,
    Health,
    Spiritual,
}

impl AdviceDomain {
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Wealth => "Coins",
            Self::Love => "Heart",
            Self::Social => "Users",
            Self::Health => "Activity",
            Self::Spiritual => "Sparkles",
        }
    }
}

const ALL_DOMAINS: [AdviceDomain; 5] = [
    AdviceDomain::Wealth,
    AdviceDomain::Love,
    AdviceDomain::Social,
    AdviceDomain::Health,
    AdviceDomain::Spiritual,
];

/// One do/don't advice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceItem {
    pub domain: AdviceDomain,
    pub icon: &'static str,
    pub suggestion: &'static str,
    pub do_action: &'static str,
    pub dont_action: &'static str,
    pub signals_used: Vec<String>,
}

/// A decade-level strategy with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeStrategy {
    pub domain: &'static str,
    pub strategy: &'static str,
    pub rationale: &'static str,
    pub signals_used: Vec<String>,
}

type AdviceText = (&'static str, &'static str, &'static str);

const fn advice_pool(domain: AdviceDomain) -> &'static [AdviceText] {
    match domain {
        AdviceDomain::Wealth => &[
            ("Prioritize building an emergency fund this year.", "Set up automatic monthly savings transfers.", "Don't make large speculative investments without thorough research."),
            ("Review and optimize your tax strategy.", "Consult a financial advisor for personalized planning.", "Don't ignore small recurring expenses — they compound significantly."),
            ("Invest in skills that increase your earning potential.", "Take a course or certification in a high-demand field.", "Don't rely on a single income source during this period."),
        ],
        AdviceDomain::Love => &[
            ("Prioritize quality time with your partner or loved ones.", "Schedule regular date nights or meaningful conversations.", "Don't let work consume all your emotional energy."),
            ("Practice active listening and emotional vulnerability.", "Share your feelings openly and ask about theirs.", "Don't make assumptions about your partner's needs without asking."),
            ("If single, expand your social circles authentically.", "Join interest-based communities where genuine connections form.", "Don't rush into commitments — let relationships develop naturally."),
        ],
        AdviceDomain::Social => &[
            ("Strengthen your inner circle — quality over quantity.", "Reach out to 2–3 close friends you've been meaning to reconnect with.", "Don't spread yourself thin across too many social obligations."),
            ("Take a leadership role in your community.", "Volunteer for a cause aligned with your values.", "Don't engage in gossip or toxic group dynamics."),
            ("Nurture family bonds during holidays and milestones.", "Create meaningful traditions that deepen family connection.", "Don't neglect elderly family members — their wisdom is invaluable."),
        ],
        AdviceDomain::Health => &[
            ("Establish a consistent exercise routine.", "Start with 20 minutes of movement daily and build from there.", "Don't sacrifice sleep for productivity — it backfires."),
            ("Address mental health proactively.", "Schedule regular therapy or counseling sessions.", "Don't self-medicate or ignore persistent symptoms."),
            ("Focus on nutrition and gut health.", "Add more whole foods and reduce processed food intake.", "Don't skip regular health check-ups."),
        ],
        AdviceDomain::Spiritual => &[
            ("Develop a daily meditation or mindfulness practice.", "Start with 5-minute sessions and increase gradually.", "Don't seek spiritual growth to escape real-world responsibilities."),
            ("Study the divination systems that resonate with you.", "Journal about how BaZi and Weton insights apply to your daily life.", "Don't become rigidly attached to any single prediction framework."),
            ("Practice gratitude as a daily ritual.", "Write down 3 things you're grateful for each morning.", "Don't compare your spiritual journey to others'."),
        ],
    }
}

/// Advice items for one year, seeded from
/// `"advice-{year}-{day master}-{weton}"`.
pub fn generate_yearly_advice(
    year: i32,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
    weton: &WetonResult,
) -> Vec<AdviceItem> {
    let seed = hash_seed(&format!(
        "advice-{year}-{}-{}",
        bazi.day_master.name(),
        weton.weton
    ));
    let mut rng = SeededRandom::new(seed);

    ALL_DOMAINS
        .iter()
        .map(|&domain| {
            let pool = advice_pool(domain);
            let idx = rng.next_int(0, pool.len() as i32 - 1) as usize;
            let (suggestion, do_action, dont_action) = pool[idx];
            AdviceItem {
                domain,
                icon: domain.icon(),
                suggestion,
                do_action,
                dont_action,
                signals_used: vec![
                    format!("BaZi {} Day Master", bazi.day_master.name()),
                    format!("{} Transit", zodiac.sign.name()),
                    format!("Weton {}", weton.weton),
                ],
            }
        })
        .collect()
}

const STRATEGY_TEMPLATES: [(&str, &[(&str, &str)]); 5] = [
    (
        "Career & Wealth",
        &[
            ("Build multiple income streams — diversify between active and passive revenue.", "Your element balance suggests vulnerability to single-source dependence."),
            ("Invest in real estate or tangible assets during this decade.", "Earth and Metal influences favor physical asset accumulation."),
            ("Position yourself as a domain expert and build thought leadership.", "Your BaZi pillar alignment supports authority-building in this period."),
        ],
    ),
    (
        "Relationships",
        &[
            ("Define clear relationship boundaries while remaining emotionally available.", "Your Weton energy pattern suggests both deep connection needs and overwhelm risk."),
            ("Invest in partnerships that align with shared long-term vision.", "Zodiac and BaZi signals converge on the importance of aligned values."),
        ],
    ),
    (
        "Social & Community",
        &[
            ("Build a mentorship network — both as mentor and mentee.", "Your luck cycle position favors knowledge transfer relationships."),
            ("Engage in community service that aligns with your elemental strengths.", "Social contribution amplifies your positive Neptu energy."),
        ],
    ),
    (
        "Health & Longevity",
        &[
            ("Establish preventive health protocols appropriate for this life stage.", "Your weakest element signals potential vulnerability — proactive care is essential."),
            ("Balance high-intensity pursuits with restorative practices.", "Your Weton Neptu score suggests the need for energy management."),
        ],
    ),
    (
        "Legacy & Purpose",
        &[
            ("Begin documenting and sharing the wisdom you've accumulated.", "Your BaZi luck cycle approaches a phase where teaching amplifies your influence."),
            ("Align major life decisions with your deepest values, not external expectations.", "Zodiac and Saju signals indicate maximum fulfillment through authentic expression."),
        ],
    ),
];

/// Strategies for one decade, seeded from
/// `"strategy-{decade start}-{day master}"`.
pub fn generate_decade_strategies(
    decade_start: i32,
    bazi: &BaZiResult,
    zodiac: &WesternZodiac,
    weton: &WetonResult,
) -> Vec<DecadeStrategy> {
    let seed = hash_seed(&format!("strategy-{decade_start}-{}", bazi.day_master.name()));
    let mut rng = SeededRandom::new(seed);

    STRATEGY_TEMPLATES
        .iter()
        .map(|&(domain, options)| {
            let idx = rng.next_int(0, options.len() as i32 - 1) as usize;
            let (strategy, rationale) = options[idx];
            DecadeStrategy {
                domain,
                strategy,
                rationale,
                signals_used: vec![
                    format!("BaZi {}", bazi.day_master.name()),
                    format!("{} Cycle", zodiac.sign.name()),
                    format!("Neptu {}", weton.total_neptu),
                ],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::bazi::calculate_bazi;
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
    fn advice_covers_five_domains() {
        let (bazi, zodiac, weton) = fixtures();
        let items = generate_yearly_advice(2027, &bazi, &zodiac, &weton);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].domain, AdviceDomain::Wealth);
        assert_eq!(items[4].domain, AdviceDomain::Spiritual);
    }

    #[test]
    fn advice_is_locally_reproducible() {
        let (bazi, zodiac, weton) = fixtures();
        assert_eq!(
            generate_yearly_advice(2027, &bazi, &zodiac, &weton),
            generate_yearly_advice(2027, &bazi, &zodiac, &weton)
        );
    }

    #[test]
    fn advice_signals_name_the_inputs() {
        let (bazi, zodiac, weton) = fixtures();
        let items = generate_yearly_advice(2027, &bazi, &zodiac, &weton);
        assert!(items[0].signals_used[0].contains("Earth"));
        assert!(items[0].signals_used[1].contains("Taurus"));
        assert!(items[0].signals_used[2].contains("Senin Pahing"));
    }

    #[test]
    fn strategies_cover_five_life_areas() {
        let (bazi, zodiac, weton) = fixtures();
        let strategies = generate_decade_strategies(2030, &bazi, &zodiac, &weton);
        assert_eq!(strategies.len(), 5);
        assert_eq!(strategies[0].domain, "Career & Wealth");
        assert_eq!(strategies[4].domain, "Legacy & Purpose");
    }

    #[test]
    fn strategies_vary_across_decades() {
        let (bazi, zodiac, weton) = fixtures();
        let decades: Vec<Vec<DecadeStrategy>> = (0..6)
            .map(|i| generate_decade_strategies(1990 + i * 10, &bazi, &zodiac, &weton))
            .collect();
        assert!(decades.windows(2).any(|w| w[0] != w[1]));
    }
}
