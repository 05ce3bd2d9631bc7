use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yinyang_base::{Branch, Stem};
use yinyang_config::Config;
use yinyang_rs::{
    BirthInput, CivilDateTime, DEFAULT_LONGITUDE, Decade, Dimension, Gender, NatalReading,
    Pipeline, Profile, Trend, WindowRequest, city_longitude, element_of, solar_time,
};
use yinyang_time::{cities_in, provinces};

#[derive(Parser)]
#[command(name = "yinyang", about = "Four Pillars profile and life-trend CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where the birth happened.
#[derive(Args, Debug, Clone)]
struct PlaceArgs {
    /// Longitude in degrees east
    #[arg(long, allow_hyphen_values = true, conflicts_with = "city")]
    lon: Option<f64>,
    /// City from the built-in table (see `cities`)
    #[arg(long)]
    city: Option<String>,
    /// Province narrowing the city lookup
    #[arg(long, requires = "city")]
    province: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct BirthArgs {
    /// Civil birth time in UTC+8 (YYYY-MM-DDThh:mm)
    #[arg(long)]
    date: String,
    /// Gender code: 1 male, 0 female
    #[arg(long, default_value = "1")]
    gender: i64,
    #[command(flatten)]
    place: PlaceArgs,
}

#[derive(Args, Debug, Clone, Copy)]
struct WindowArgs {
    /// First trend year (default: birth year)
    #[arg(long)]
    start: Option<i32>,
    /// Number of trend years (default: 80)
    #[arg(long)]
    count: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and natal ten-gods
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Full profile: chart, energy, pattern, markers, decades and trend
    Profile {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        window: WindowArgs,
    },
    /// Year-by-year scores
    Trend {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        window: WindowArgs,
        /// Only this dimension (overall, career, wealth, health, love, parents, children)
        #[arg(long)]
        dimension: Option<String>,
    },
    /// Decade luck cycles, including the pre-luck decade
    Decades {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Element of a stem or branch symbol
    Element {
        /// Symbol such as 甲 or 子
        symbol: String,
    },
    /// List provinces, or the cities of one province
    Cities {
        /// Province name
        #[arg(long)]
        province: Option<String>,
    },
    /// True solar time for a civil moment
    SolarTime {
        /// Civil time in UTC+8 (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
    },
}

fn exit_with<E: Display>(context: &str, err: E) -> ! {
    eprintln!("{context}: {err}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> Config {
    Config::load(path.map(PathBuf::as_path))
        .unwrap_or_else(|e| exit_with("Failed to load config", e))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_civil(s: &str) -> CivilDateTime {
    CivilDateTime::from_str(s).unwrap_or_else(|e| exit_with("Invalid date", e))
}

fn resolve_longitude(place: &PlaceArgs) -> f64 {
    match (&place.lon, &place.city) {
        (Some(lon), _) => *lon,
        (None, Some(city)) => city_longitude(place.province.as_deref(), city),
        (None, None) => DEFAULT_LONGITUDE,
    }
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let gender = Gender::from_code(args.gender).unwrap_or_else(|e| exit_with("Invalid gender", e));
    BirthInput::new(parse_civil(&args.date), gender, resolve_longitude(&args.place))
}

fn window_of(args: WindowArgs) -> WindowRequest {
    WindowRequest::new(args.start, args.count)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with("Failed to serialise output", e),
    }
}

fn print_chart(natal: &NatalReading) {
    let st = &natal.solar_time;
    println!(
        "Solar time: {} -> {} ({:+.1} min)",
        st.civil, st.corrected, st.offset_minutes
    );
    println!("Pillars: {}", natal.chart);
    for (gods, markers) in natal.ten_gods.iter().zip(&natal.markers) {
        let ganzhi = natal.chart.ganzhi(gods.position);
        let stem_god = gods.stem.map_or("日主", |g| g.chinese());
        let labels: Vec<_> = markers.markers.iter().map(|m| m.label).collect();
        println!(
            "  {} {}  {} / {}  {}",
            gods.position.chinese(),
            ganzhi,
            stem_god,
            gods.branch.chinese(),
            labels.join(" ")
        );
    }
}

fn print_natal(natal: &NatalReading) {
    print_chart(natal);
    let energy: Vec<_> = natal
        .energy
        .iter()
        .map(|(e, v)| format!("{}{v:.1}", e.chinese()))
        .collect();
    println!("Energy: {}", energy.join(" "));
    let p = &natal.pattern;
    let favorable: Vec<_> = p.favorable.iter().map(|e| e.chinese()).collect();
    println!(
        "Pattern: {} (support {:.1}, climate {}) favorable {}",
        p.name(),
        p.self_support,
        p.climate.chinese(),
        favorable.join("")
    );
}

fn print_decades(decades: &[Decade]) {
    for d in decades {
        let label = d.ganzhi.map_or_else(|| "--".to_string(), |g| g.to_string());
        println!(
            "  {:>2} {}  {}-{}  age {}",
            d.index, label, d.start_year, d.end_year, d.start_age
        );
    }
}

fn print_trend(trend: &Trend, only: Option<Dimension>) {
    for series in trend.iter() {
        if only.is_some_and(|d| d != series.dimension) {
            continue;
        }
        println!("{} ({})", series.dimension.chinese(), series.dimension.key());
        for point in &series.points {
            let markers: Vec<_> = point.markers.iter().map(|m| m.label).collect();
            println!(
                "  {} {} {:>3}  {}",
                point.year,
                point.ganzhi,
                point.score,
                markers.join(" ")
            );
        }
    }
}

fn print_profile(profile: &Profile) {
    println!("{}", profile.chart_title);
    print_natal(&profile.natal);
    let dm = profile.day_master;
    println!("Day master: {} {} {}  {}", dm.stem, dm.image, dm.icon, dm.traits);
    println!("Decades:");
    for d in &profile.decades {
        println!(
            "  {:>2} {}  {}-{}  age {}",
            d.index, d.ganzhi, d.start_year, d.end_year, d.start_age
        );
    }
    print_trend(&profile.trend, Some(Dimension::Overall));
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    init_logging(&config.logging.level);
    tracing::debug!(
        profile = %config.ruleset.profile,
        zi_hour = ?config.calendar.zi_hour,
        "configuration loaded"
    );
    let pipeline = Pipeline::from_config(&config);

    match cli.command {
        Commands::Chart { birth } => {
            let input = birth_input(&birth);
            let natal = pipeline
                .natal(&input)
                .unwrap_or_else(|e| exit_with("Chart failed", e));
            if cli.json {
                print_json(&natal);
            } else {
                print_chart(&natal);
            }
        }

        Commands::Profile { birth, window } => {
            let input = birth_input(&birth);
            let profile = pipeline
                .profile(&input, window_of(window))
                .unwrap_or_else(|e| exit_with("Profile failed", e));
            if cli.json {
                print_json(&profile);
            } else {
                print_profile(&profile);
            }
        }

        Commands::Trend {
            birth,
            window,
            dimension,
        } => {
            let only = dimension.map(|d| {
                Dimension::from_str(&d).unwrap_or_else(|e| exit_with("Invalid dimension", e))
            });
            let input = birth_input(&birth);
            let trend = pipeline
                .natal(&input)
                .and_then(|natal| {
                    let decades = pipeline.decades(&input, &natal)?;
                    pipeline.trend(&input, &natal, &decades, window_of(window))
                })
                .unwrap_or_else(|e| exit_with("Trend failed", e));
            match (cli.json, only) {
                (true, Some(d)) => print_json(trend.series(d)),
                (true, None) => print_json(&trend),
                (false, only) => print_trend(&trend, only),
            }
        }

        Commands::Decades { birth } => {
            let input = birth_input(&birth);
            let decades = pipeline
                .natal(&input)
                .and_then(|natal| pipeline.decades(&input, &natal))
                .unwrap_or_else(|e| exit_with("Decades failed", e));
            if cli.json {
                print_json(&decades);
            } else {
                print_decades(&decades);
            }
        }

        Commands::Element { symbol } => {
            let element = element_of(&symbol);
            if cli.json {
                print_json(&element);
            } else {
                let kind = if Stem::from_symbol(&symbol).is_some() {
                    "stem"
                } else if Branch::from_symbol(&symbol).is_some() {
                    "branch"
                } else {
                    "unknown symbol, fallback"
                };
                println!("{symbol}: {} {} ({kind})", element.chinese(), element.name());
            }
        }

        Commands::Cities { province } => match province {
            Some(p) => {
                let cities: Vec<_> = cities_in(&p).collect();
                if cities.is_empty() {
                    exit_with("Unknown province", p);
                }
                if cli.json {
                    print_json(&cities);
                } else {
                    for c in cities {
                        println!("  {} {:.2}", c.name, c.longitude_deg);
                    }
                }
            }
            None => {
                let names = provinces();
                if cli.json {
                    print_json(&names);
                } else {
                    println!("{}", names.join(" "));
                }
            }
        },

        Commands::SolarTime { date, place } => {
            let civil = parse_civil(&date);
            let st = solar_time(&civil, resolve_longitude(&place))
                .unwrap_or_else(|e| exit_with("Solar time failed", e));
            if cli.json {
                print_json(&st);
            } else {
                println!(
                    "{} -> {} ({:+.1} min, day shift {})",
                    st.civil, st.corrected, st.offset_minutes, st.day_shift
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_profile_with_city() {
        let cli = Cli::try_parse_from([
            "yinyang", "profile", "--date", "1990-05-20T04:00", "--gender", "0", "--city", "北京",
            "--count", "10", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Profile { birth, window } => {
                assert_eq!(birth.gender, 0);
                assert_eq!(birth.place.city.as_deref(), Some("北京"));
                assert_eq!(window.count, Some(10));
                assert_eq!(window.start, None);
            }
            _ => panic!("expected profile"),
        }
    }

    #[test]
    fn lon_and_city_conflict() {
        let res = Cli::try_parse_from([
            "yinyang", "chart", "--date", "1990-05-20T04:00", "--lon", "116.4", "--city", "北京",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn negative_longitude_is_accepted() {
        let cli = Cli::try_parse_from([
            "yinyang", "solar-time", "--date", "2024-01-01T12:00", "--lon", "-73.9",
        ])
        .unwrap();
        match cli.command {
            Commands::SolarTime { place, .. } => assert_eq!(resolve_longitude(&place), -73.9),
            _ => panic!("expected solar-time"),
        }
    }

    #[test]
    fn longitude_falls_back_to_reference_meridian() {
        let place = PlaceArgs {
            lon: None,
            city: Some("Atlantis".to_string()),
            province: None,
        };
        assert_eq!(resolve_longitude(&place), DEFAULT_LONGITUDE);
        let none = PlaceArgs {
            lon: None,
            city: None,
            province: None,
        };
        assert_eq!(resolve_longitude(&none), DEFAULT_LONGITUDE);
    }

    #[test]
    fn missing_start_is_left_to_pipeline() {
        let default = WindowArgs {
            start: None,
            count: None,
        };
        assert_eq!(window_of(default), WindowRequest::default());
        let custom = WindowArgs {
            start: None,
            count: Some(5),
        };
        assert_eq!(window_of(custom), WindowRequest::new(None, Some(5)));
    }

    #[test]
    fn count_only_follows_corrected_birth_year() {
        // 23:30 on 31 Dec at 135°E corrects into 1991
        let cli = Cli::try_parse_from([
            "yinyang", "profile", "--date", "1990-12-31T23:30", "--lon", "135", "--count", "5",
        ])
        .unwrap();
        let Commands::Profile { birth, window } = cli.command else {
            panic!("expected profile");
        };
        let profile = Pipeline::default()
            .profile(&birth_input(&birth), window_of(window))
            .unwrap();
        let years: Vec<i32> = profile
            .trend
            .scores(Dimension::Overall)
            .map(|(year, _)| year)
            .collect();
        assert_eq!(years, vec![1991, 1992, 1993, 1994, 1995]);
    }
}
