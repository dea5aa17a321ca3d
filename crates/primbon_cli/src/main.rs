use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use primbon_rs::{
    CoupleProfile, DEFAULT_TOP_N, Gender, MatchMode, PrimbonError, generate_compatibility_reading,
    generate_reading, generate_recommendations, profile_from_strings, rank_wedding_dates,
};

#[derive(Parser)]
#[command(name = "primbon", about = "Deterministic divination readings CLI")]
struct Cli {
    /// Emit compact JSON instead of pretty-printed.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Other => Self::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Romance,
    Friend,
    Colleague,
}

impl From<ModeArg> for MatchMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Romance => Self::Romance,
            ModeArg::Friend => Self::Friend,
            ModeArg::Colleague => Self::Colleague,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full reading for one person
    Reading {
        /// Full name
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Time of birth (HH:MM)
        #[arg(long)]
        time: Option<String>,
        /// Gender (used by the Kua formula)
        #[arg(long)]
        gender: Option<GenderArg>,
    },
    /// Couple compatibility reading
    Compatibility {
        #[arg(long)]
        name_a: String,
        #[arg(long)]
        dob_a: String,
        #[arg(long)]
        time_a: Option<String>,
        #[arg(long)]
        name_b: String,
        #[arg(long)]
        dob_b: String,
        #[arg(long)]
        time_b: Option<String>,
    },
    /// Rank auspicious wedding dates in a range
    Dates {
        #[arg(long)]
        name_a: String,
        #[arg(long)]
        dob_a: String,
        #[arg(long)]
        time_a: Option<String>,
        #[arg(long)]
        name_b: String,
        #[arg(long)]
        dob_b: String,
        #[arg(long)]
        time_b: Option<String>,
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Length of the best/avoid lists
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
    /// Ranked sign/animal matches for one person
    Recommend {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dob: String,
        #[arg(long)]
        time: Option<String>,
        /// Relationship mode
        #[arg(long, value_enum, default_value = "romance")]
        mode: ModeArg,
        /// Optional second person for a pair comparison
        #[arg(long)]
        other_name: Option<String>,
        #[arg(long)]
        other_dob: Option<String>,
        #[arg(long)]
        other_time: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, PrimbonError> {
    Ok(s.parse::<NaiveDate>()?)
}

fn print_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<(), serde_json::Error> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Reading {
            name,
            dob,
            time,
            gender,
        } => {
            let profile =
                profile_from_strings(&name, &dob, time.as_deref(), gender.map(Into::into))?;
            debug!(seed = profile.seed(), "profile seed derived");
            let reading = generate_reading(&profile);
            print_json(&reading, cli.compact)?;
        }
        Commands::Compatibility {
            name_a,
            dob_a,
            time_a,
            name_b,
            dob_b,
            time_b,
        } => {
            let couple = CoupleProfile {
                partner_a: profile_from_strings(&name_a, &dob_a, time_a.as_deref(), None)?,
                partner_b: profile_from_strings(&name_b, &dob_b, time_b.as_deref(), None)?,
            };
            let result = generate_compatibility_reading(&couple);
            debug!(combined = result.combined_score, "compatibility scored");
            print_json(&result, cli.compact)?;
        }
        Commands::Dates {
            name_a,
            dob_a,
            time_a,
            name_b,
            dob_b,
            time_b,
            start,
            end,
            top,
        } => {
            let couple = CoupleProfile {
                partner_a: profile_from_strings(&name_a, &dob_a, time_a.as_deref(), None)?,
                partner_b: profile_from_strings(&name_b, &dob_b, time_b.as_deref(), None)?,
            };
            let ranking = rank_wedding_dates(&couple, parse_date(&start)?, parse_date(&end)?, top);
            debug!(
                candidates = ranking.all_dates.len() + ranking.avoid_dates.len(),
                best = ranking.best_dates.len(),
                "dates ranked"
            );
            print_json(&ranking, cli.compact)?;
        }
        Commands::Recommend {
            name,
            dob,
            time,
            mode,
            other_name,
            other_dob,
            other_time,
        } => {
            let profile = profile_from_strings(&name, &dob, time.as_deref(), None)?;
            let reading = generate_reading(&profile);
            let other = match (other_name, other_dob) {
                (Some(n), Some(d)) => {
                    let p = profile_from_strings(&n, &d, other_time.as_deref(), None)?;
                    Some(generate_reading(&p))
                }
                _ => None,
            };
            let recs = generate_recommendations(&reading, mode.into(), other.as_ref());
            print_json(&recs, cli.compact)?;
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
