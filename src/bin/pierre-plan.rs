// ABOUTME: Pierre Plan CLI - generates periodized training plans and VDOT pace tables
// ABOUTME: Prints JSON on stdout, logs on stderr, and an error envelope with a non-zero exit on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Sixteen-week half marathon plan, pretty printed
//! pierre-plan generate --race-date 2025-04-27 --distance half --race-name "Spring Half" --pretty
//!
//! # Fitness from a recent 10K and a goal time
//! pierre-plan generate --race-date 2025-10-12 --distance full --recent-time 45:00 \
//!     --recent-distance 10K --target-time 3:30:00
//!
//! # VDOT and paces from a race result
//! pierre-plan vdot --distance 5K --time 20:00
//!
//! # Training paces for a VDOT
//! pierre-plan paces --vdot 50
//!
//! # Predicted marathon time at VDOT 52
//! pierre-plan predict --vdot 52 --distance full
//! ```

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use pierre_planner::{
    config::PlannerConfig,
    engine::algorithms::{derive_paces, vdot::predict_race_time, vdot::vdot_from_seconds},
    errors::{AppError, AppResult, ErrorResponse},
    logging::LoggingConfig,
    models::RaceDistance,
    services::{PlanRequest, PlanService},
    units::{format_time, try_parse_time},
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-plan",
    about = "Pierre training plan generator",
    long_about = "Generates periodized 5K to marathon training plans from a race goal and an athlete profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a full training plan
    Generate {
        /// Race day (YYYY-MM-DD)
        #[arg(long)]
        race_date: NaiveDate,

        /// Race distance (5K, 10K, half, full)
        #[arg(long)]
        distance: RaceDistance,

        /// Race name
        #[arg(long, default_value = "Goal race")]
        race_name: String,

        /// Goal finish time (m:ss or h:mm:ss)
        #[arg(long)]
        target_time: Option<String>,

        /// Host city
        #[arg(long)]
        city: Option<String>,

        /// Current weekly kilometres
        #[arg(long)]
        weekly_km: Option<f64>,

        /// Training days per week
        #[arg(long)]
        days_per_week: Option<u8>,

        /// Hours available per session
        #[arg(long)]
        hours_per_session: Option<f64>,

        /// Months of regular running
        #[arg(long)]
        running_age: Option<u32>,

        /// Finish time of a recent race (m:ss or h:mm:ss)
        #[arg(long, requires = "recent_distance")]
        recent_time: Option<String>,

        /// Distance of the recent race
        #[arg(long, requires = "recent_time")]
        recent_distance: Option<RaceDistance>,

        /// Reference date instead of the local date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Print the plan summary instead of the full plan
        #[arg(long)]
        summary: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Compute VDOT and training paces from a race result
    Vdot {
        /// Race distance
        #[arg(long)]
        distance: RaceDistance,

        /// Finish time (m:ss or h:mm:ss)
        #[arg(long)]
        time: String,
    },

    /// Show training paces for a VDOT
    Paces {
        /// VDOT score
        #[arg(long)]
        vdot: f64,
    },

    /// Predict a finish time for a VDOT
    Predict {
        /// VDOT score
        #[arg(long)]
        vdot: f64,

        /// Race distance
        #[arg(long)]
        distance: RaceDistance,
    },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn finite_vdot(vdot: f64) -> AppResult<f64> {
    if vdot.is_finite() && vdot > 0.0 {
        Ok(vdot)
    } else {
        Err(AppError::out_of_range(format!(
            "VDOT must be a positive number, got {vdot}"
        )))
    }
}

fn run(command: Command, config: PlannerConfig) -> AppResult<()> {
    match command {
        Command::Generate {
            race_date,
            distance,
            race_name,
            target_time,
            city,
            weekly_km,
            days_per_week,
            hours_per_session,
            running_age,
            recent_time,
            recent_distance,
            today,
            summary,
            pretty,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let request = PlanRequest {
                race_name: Some(race_name),
                race_date: Some(race_date),
                distance: Some(distance),
                target_time,
                city,
                weekly_km,
                days_per_week,
                hours_per_session,
                running_age_months: running_age,
                recent_race_time: recent_time,
                recent_race_distance: recent_distance,
            };
            let plan = PlanService::new(config).create_plan(&request, today)?;
            if summary {
                print_json(&plan.summary(), pretty)
            } else {
                print_json(&plan, pretty)
            }
        }
        Command::Vdot { distance, time } => {
            let seconds = try_parse_time(&time)?;
            let vdot = vdot_from_seconds(distance, f64::from(seconds));
            print_json(
                &json!({
                    "distance": distance,
                    "time": time,
                    "vdot": vdot,
                    "paces": derive_paces(vdot),
                }),
                true,
            )
        }
        Command::Paces { vdot } => {
            let vdot = finite_vdot(vdot)?;
            print_json(&json!({ "vdot": vdot, "paces": derive_paces(vdot) }), true)
        }
        Command::Predict { vdot, distance } => {
            let vdot = finite_vdot(vdot)?;
            let seconds = predict_race_time(vdot, distance);
            print_json(
                &json!({
                    "vdot": vdot,
                    "distance": distance,
                    "seconds": seconds.round(),
                    "time": format_time(seconds),
                }),
                true,
            )
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = PlannerConfig::from_env().and_then(|config| {
        debug!("{}", config.summary());
        run(cli.command, config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            let response = ErrorResponse::from(error);
            match serde_json::to_string(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
