//! Run the demand-response simulation.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pheromq::prelude::*;

use crate::config::Config;

pub struct RunArgs {
    pub rounds: Option<u64>,
    pub target: Option<f64>,
    pub evap: Option<f64>,
    pub diff: Option<f64>,
    pub seed: Option<u64>,
    pub config: Option<String>,
    pub export: Option<String>,
    pub quiet: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let rounds = args.rounds.unwrap_or(config.run.rounds);
    let target_kw = args.target.unwrap_or(config.run.target_kw);
    let seed = args.seed.unwrap_or(config.run.seed);
    let field_config = FieldConfig {
        evap: args.evap.unwrap_or(config.field.evap),
        diff: args.diff.unwrap_or(config.field.diff),
    };

    let topology = PetTopology::honeycomb7();
    let field = SignalField::new(field_config).context("Invalid field parameters")?;

    let profile = CapacityProfile {
        base_load_kw: config.spawn.base_load_kw,
        max_shed_kw: config.spawn.max_shed_kw,
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    let participants = spawn_participants(&topology, &profile, &mut rng)
        .context("Invalid capacity profile")?;

    let nodes = topology.nodes();
    let mut hive = Hive::new(topology, field);
    hive.spawn_all(participants);
    // Seed a demand-response pheromone at the center node.
    hive.seed(NodeId(0), SignalKind::DemandResponse, 1.0)?;

    println!(
        "{} PheroMQ demand-response run (honeycomb-7)",
        "→".blue()
    );
    println!(
        "  evap={} diff={} target={} kW seed={}",
        field_config.evap.to_string().cyan(),
        field_config.diff.to_string().cyan(),
        target_kw.to_string().cyan(),
        seed.to_string().cyan()
    );

    let progress = if args.quiet {
        let pb = ProgressBar::new(rounds);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} rounds")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcome = hive.run(rounds, target_kw).context("Run failed")?;

    for record in hive.history() {
        if let Some(pb) = &progress {
            pb.inc(1);
        } else {
            println!(
                "\n--- round {} total_offer={:.2} kW ---",
                record.round, record.total_offer_kw
            );
            println!(
                "{}",
                render_round(record, &nodes, &SignalKind::DemandResponse)
            );
        }
    }
    if let Some(pb) = progress {
        pb.finish_with_message("done");
        // Per-round detail was suppressed; show the totals table instead.
        println!("\n{}", render_totals(hive.history()));
    }

    println!();
    match &outcome {
        RunOutcome::TargetMet { round, total_kw } => {
            println!(
                "{} Target {} kW met at round {} with {:.2} kW",
                "✓".green().bold(),
                target_kw,
                round.to_string().green(),
                total_kw
            );
        }
        RunOutcome::RoundsExhausted { best_total_kw } => {
            println!(
                "{} Target {} kW not met in {} rounds (best {:.2} kW)",
                "✗".yellow().bold(),
                target_kw,
                rounds,
                best_total_kw
            );
        }
    }

    let stats = hive.stats();
    println!(
        "  {} participants, {:.1} kW total capacity, {} rounds recorded, field mass {:.3}",
        stats.participants, stats.total_capacity_kw, stats.rounds_recorded, stats.field_mass
    );

    if let Some(path) = args.export {
        let report = RunReport::from_run(&hive, outcome);
        write_report(&report, Path::new(&path))
            .with_context(|| format!("Failed to write report: {}", path))?;
        println!("  Saved report: {}", path.cyan());
    }

    Ok(())
}
