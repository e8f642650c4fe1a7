//! Sweep command implementation.
//!
//! This module implements the `sweep` command, which removes reservations
//! whose slot has already elapsed. The clock can be pinned with
//! `--now-date`/`--now-time` for deterministic runs; otherwise the local
//! wall clock is used.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use huddle::operations::SweepOperations;
use huddle::{ReservationDate, SlotTime};

/// Remove expired reservations.
#[derive(Args)]
pub struct SweepCommand {
    /// Treat this date as today (DD/MM/YYYY; default: current date)
    #[arg(long, value_name = "DATE")]
    pub now_date: Option<String>,

    /// Treat this time as now (HH:mm; default: current time)
    #[arg(long, value_name = "TIME")]
    pub now_time: Option<String>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl SweepCommand {
    /// Execute the sweep command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let (now_date, now_time) = self.resolve_now()?;

        if self.dry_run && !global.quiet {
            eprintln!("[DRY RUN] Scanning for reservations expired as of {now_date} {now_time}...");
        }

        let mut db = open_database(global, &config)?;

        let result = SweepOperations::sweep(&mut db, now_date, now_time, self.dry_run)
            .map_err(CliError::from)?;

        // Format output
        if global.quiet {
            if result.removed_count > 0 {
                println!("{}", result.removed_count);
            }
        } else if global.verbose {
            if self.dry_run {
                eprintln!(
                    "[DRY RUN] Would remove {} expired reservation(s):",
                    result.removed_count
                );
            } else {
                eprintln!("Removed {} expired reservation(s):", result.removed_count);
            }

            for reservation in &result.removed_reservations {
                eprintln!(
                    "  - {} {} ({})",
                    reservation.date(),
                    reservation.slot(),
                    reservation.id()
                );
            }
        } else if self.dry_run {
            eprintln!(
                "[DRY RUN] Would remove {} expired reservation(s)",
                result.removed_count
            );
        } else {
            eprintln!("Removed {} expired reservation(s)", result.removed_count);
        }

        Ok(())
    }

    /// Resolve the sweep instant from flags, falling back to the wall clock.
    fn resolve_now(&self) -> Result<(ReservationDate, SlotTime), CliError> {
        let now = chrono::Local::now();

        let now_date = match self.now_date {
            Some(ref raw) => ReservationDate::parse(raw)
                .map_err(huddle::Error::from)
                .map_err(CliError::from)?,
            None => {
                let today = now.format(ReservationDate::WIRE_FORMAT).to_string();
                ReservationDate::parse(&today)
                    .map_err(huddle::Error::from)
                    .map_err(CliError::from)?
            }
        };

        let now_time = match self.now_time {
            Some(ref raw) => SlotTime::parse(raw)
                .map_err(huddle::Error::from)
                .map_err(CliError::from)?,
            None => {
                let time = now.format(SlotTime::WIRE_FORMAT).to_string();
                SlotTime::parse(&time)
                    .map_err(huddle::Error::from)
                    .map_err(CliError::from)?
            }
        };

        Ok((now_date, now_time))
    }
}
