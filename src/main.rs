use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use scamguard::engine::{PageContext, ScanEngine, ScanOutcome};
use scamguard::storage::JsonFileStore;
use scamguard::ScamIndicators;
use scamguard::TrustStore;
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("scamguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scores rendered web pages for tech-support-scam indicators")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Indicator tables file (YAML); built-in tables when omitted"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the built-in indicator tables to FILE and exit"),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the indicator tables and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("hostname")
                .long("hostname")
                .value_name("HOST")
                .help("Hostname of the page under analysis"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .help("Full URL of the page under analysis"),
        )
        .arg(
            Arg::new("text-file")
                .long("text-file")
                .value_name("FILE")
                .help("Visible page text; '-' reads stdin"),
        )
        .arg(
            Arg::new("attr")
                .long("attr")
                .value_name("VALUE")
                .help("Class/id attribute value of a page element (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("trust-file")
                .long("trust-file")
                .value_name("FILE")
                .help("Trust store file (JSON)")
                .default_value("scamguard-trust.json"),
        )
        .arg(
            Arg::new("trust")
                .long("trust")
                .value_name("DOMAIN")
                .help("Add DOMAIN to the trusted list and exit"),
        )
        .arg(
            Arg::new("list-trusted")
                .long("list-trusted")
                .help("List trusted domains and reported false positives, then exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("report-fp")
                .long("report-fp")
                .value_name("URL")
                .help("Report URL's domain as a false positive and exit"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the scan outcome as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    if let Some(path) = matches.get_one::<String>("generate-config") {
        let yaml = ScamIndicators::default()
            .to_yaml()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        std::fs::write(path, yaml).with_context(|| format!("Failed to write {path}"))?;
        println!("Wrote default indicator tables to {path}");
        return Ok(());
    }

    let indicators = match matches.get_one::<String>("config") {
        Some(path) => ScamIndicators::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Failed to load indicator tables from {path}"))?,
        None => ScamIndicators::default(),
    };

    if matches.get_flag("test-config") {
        println!(
            "Indicator tables valid: {} high-risk keywords, {} medium-risk keywords, \
             {} suspicious TLDs, {} trusted domains",
            indicators.high_risk_keywords.len(),
            indicators.medium_risk_keywords.len(),
            indicators.suspicious_tlds.len(),
            indicators.trusted_domains.len(),
        );
        return Ok(());
    }

    let trust_path = matches
        .get_one::<String>("trust-file")
        .expect("has default");
    let mut trust = TrustStore::new(Box::new(JsonFileStore::new(trust_path)));

    if let Some(domain) = matches.get_one::<String>("trust") {
        if trust.trust(domain) {
            println!("Added {domain} to trusted domains");
        } else {
            println!("{domain} is already trusted");
        }
        return Ok(());
    }

    if let Some(url) = matches.get_one::<String>("report-fp") {
        let added = trust
            .report_false_positive(url)
            .with_context(|| format!("Invalid URL: {url}"))?;
        if added {
            println!("Recorded false-positive report for {url}");
        } else {
            println!("Domain of {url} was already reported");
        }
        return Ok(());
    }

    if matches.get_flag("list-trusted") {
        println!("Trusted domains:");
        for domain in trust.trusted_domains() {
            println!("  {domain}");
        }
        println!("Reported false positives:");
        for domain in trust.false_positives() {
            println!("  {domain}");
        }
        return Ok(());
    }

    let hostname = matches
        .get_one::<String>("hostname")
        .context("--hostname is required for a scan")?;
    let url = matches
        .get_one::<String>("url")
        .context("--url is required for a scan")?;
    let text = read_text(matches.get_one::<String>("text-file"))?;
    let attrs: Vec<String> = matches
        .get_many::<String>("attr")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    let engine = ScanEngine::new(indicators);
    let ctx = PageContext::new(hostname, url, &text).with_element_attrs(attrs);
    let outcome = engine.scan(&ctx, &trust)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print_outcome(&outcome);
    Ok(())
}

fn read_text(path: Option<&String>) -> Result<String> {
    match path.map(String::as_str) {
        None => Ok(String::new()),
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read page text from stdin")?;
            Ok(text)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
    }
}

fn print_outcome(outcome: &ScanOutcome) {
    match outcome {
        ScanOutcome::Skipped { reason } => {
            println!("Skipped: {} (score 0)", reason.as_str());
        }
        ScanOutcome::Scored(result) => {
            let b = &result.breakdown;
            println!("Host:      {}", result.hostname);
            println!(
                "Score:     {:.1} (keyword {:.1}, context {:.1})",
                b.total, b.keyword_score, b.context_score
            );
            println!(
                "Verdict:   {} severity, threshold {:.0}, display {}",
                result.verdict.severity.as_str(),
                result.verdict.threshold,
                if result.verdict.eligible {
                    "eligible"
                } else {
                    "not eligible"
                }
            );

            if !b.keywords.high_risk.is_empty() {
                println!("High-risk keywords: {}", b.keywords.high_risk.join(", "));
            }
            if !b.keywords.medium_risk.is_empty() {
                println!(
                    "Medium-risk keywords: {}",
                    b.keywords.medium_risk.join(", ")
                );
            }
            if !b.phone_numbers.is_empty() {
                println!("Phone numbers: {}", b.phone_numbers.join(", "));
            }
            if b.has_popups {
                println!("Popup-like elements present");
            }
            if b.has_suspicious_tld {
                println!("Suspicious TLD");
            }
            if b.domain_reputation.score > 0 {
                println!(
                    "Domain reputation: {} (score {})",
                    b.domain_reputation.overall_risk.as_str(),
                    b.domain_reputation.score
                );
                for note in &b.domain_reputation.indicators {
                    println!("  {note}");
                }
            }
            if b.domain_age.appears_new {
                println!("Domain looks newly registered (lexical heuristic)");
            }
            for note in &b.url_analysis.indicators {
                println!("URL: {note}");
            }
        }
    }
}
