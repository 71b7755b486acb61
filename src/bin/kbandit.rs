use clap::Parser;
use kbandit::cli::Options;
use kbandit::envs::{EnvBuilder, StationaryBandit, StationaryBanditConfig};
use kbandit::logging::DisplayLogger;
use kbandit::simulation::AgentReport;
use kbandit::{compare_agents, BanditError, Prng};
use rand::SeedableRng;
use serde_json::json;
use std::error::Error;
use std::io;
use yansi::Paint;

fn new_prng(seed: Option<u64>) -> Prng {
    match seed {
        None => Prng::from_entropy(),
        Some(s) => Prng::seed_from_u64(s),
    }
}

fn run(opts: &Options, bandit: &StationaryBandit) -> Result<Vec<AgentReport>, BanditError> {
    let defs = opts.agent_defs();
    let seed = opts.seed.unwrap_or_else(rand::random);
    if opts.verbose {
        println!("Agent seed: {seed}");
    }
    let reports = match opts.report_interval {
        // Reports go to stderr so that JSON output stays parseable
        Some(_) if opts.json => compare_agents(
            bandit,
            &defs,
            opts.steps,
            seed,
            opts.report_interval,
            &mut DisplayLogger::with_writer(io::stderr()),
        )?,
        Some(_) => compare_agents(
            bandit,
            &defs,
            opts.steps,
            seed,
            opts.report_interval,
            &mut DisplayLogger::new(),
        )?,
        None => compare_agents(bandit, &defs, opts.steps, seed, None, &mut ())?,
    };
    Ok(reports)
}

fn print_report(report: &AgentReport, bandit: &StationaryBandit) {
    println!("{}", Paint::new(&report.name).bold());
    print!("{}", report.summary);
    if let (Some(estimates), Some(counts)) = (&report.value_estimates, &report.selection_counts) {
        println!("{:>8} {:>10} {:>10} {:>8}", "action", "true", "estimate", "count");
        for (action, ((mean, estimate), count)) in bandit
            .means()
            .iter()
            .zip(estimates)
            .zip(counts)
            .enumerate()
        {
            println!("{action:>8} {mean:>10.3} {estimate:>10.3} {count:>8}");
        }
    }
    println!(
        "regret: {}",
        Paint::fixed(208, format!("{:.3}", report.regret(bandit.optimal_mean())))
    );
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Options::parse();
    if opts.verbose {
        println!("{opts:#?}");
    }

    let env_config = StationaryBanditConfig::from(&opts);
    if opts.verbose {
        println!("{env_config:#?}");
    }
    let mut rng_env = new_prng(opts.env_seed);
    let bandit = env_config
        .build_env(&mut rng_env)
        .map_err(BanditError::from)?;

    let reports = run(&opts, &bandit)?;

    if opts.json {
        let output = json!({
            "means": bandit.means(),
            "spread": bandit.spread(),
            "optimal_action": bandit.optimal_action(),
            "agents": reports
                .iter()
                .map(|report| json!({
                    "report": report,
                    "regret": report.regret(bandit.optimal_mean()),
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{bandit}");
        println!(
            "optimal action: {} (mean {})",
            bandit.optimal_action(),
            bandit.optimal_mean()
        );
        println!();
        for report in &reports {
            print_report(report, &bandit);
        }
    }
    Ok(())
}
