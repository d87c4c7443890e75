//! express-line — drives one vehicle along a three-stop line.
//!
//! Two riders wait downtown, one for the university and one for the
//! village.  The vehicle is advanced until the end of the line, printing the
//! manifest after every stop.  The service day is today's weekday unless
//! `SERVICE_DAY` (e.g. `sat`) is set.

use std::io::Cursor;

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info;
use tracing_subscriber::EnvFilter;

use line_core::{Charge, LineConfig, Rider, StopName, VehicleName, Weekday};
use line_sim::{Line, LineObserver, Vehicle, load_roster_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE: &str = "Express Line";
const STOPS:   [&str; 3] = ["Downtown", "The University", "The Village"];

const ROSTER_CSV: &str = "\
rider_id,origin,destination\n\
12345612-22,Downtown,The University\n\
11223322-67,Downtown,The Village\n";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints the accounting and ridership events to stdout.
#[derive(Default)]
struct Ticker {
    takings: f64,
}

impl LineObserver for Ticker {
    fn on_departure(&mut self, vehicle: &VehicleName, carrying: usize) {
        println!("{vehicle}: carrying {carrying} riders, heading for next stop");
    }

    fn on_arrival(&mut self, vehicle: &VehicleName, stop: &StopName) {
        println!("{vehicle}: arriving at {stop:?}");
    }

    fn on_boarded(&mut self, vehicle: &VehicleName, rider: &Rider) {
        println!("{vehicle}: boarded rider {:?}", rider.id.as_str());
    }

    fn on_alighted(&mut self, vehicle: &VehicleName, rider: &Rider, _forced: bool) {
        println!("{vehicle}: unboarded rider {:?}", rider.id.as_str());
    }

    fn on_charged(&mut self, _vehicle: &VehicleName, charge: &Charge) {
        self.takings += charge.amount;
        println!("rider {}: charged {:.2}", charge.rider, charge.amount);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let service_day = match std::env::var("SERVICE_DAY") {
        Ok(day) => day
            .parse::<Weekday>()
            .map_err(|_| anyhow::anyhow!("SERVICE_DAY {day:?} is not a weekday name"))?,
        Err(_) => chrono::Local::now().weekday(),
    };
    info!(?service_day, "starting simulation");

    let mut line = Line::new(LineConfig::new(service_day));
    for stop in STOPS {
        line.add_stop(stop);
    }
    line.add_vehicle(Vehicle::new(VEHICLE));
    for stop in STOPS {
        line.route_through(VEHICLE, stop)?;
    }

    let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).context("loading roster")?;
    line.register_roster(roster)?;

    let mut ticker = Ticker::default();
    while line.advance(VEHICLE, &mut ticker)?.has_more_stops() {
        let vehicle = line.vehicle(VEHICLE).context("vehicle vanished")?;
        vehicle.riders().for_each(|r| {
            println!("    rider {:?} is heading to {:?}", r.id.as_str(), r.destination.as_str());
        });
    }

    println!("simulation done, takings {:.2}", ticker.takings);
    Ok(())
}
