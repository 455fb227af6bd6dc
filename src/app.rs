use crate::config::Settings;
use crate::input;
use crate::render::{draw_dirty, Display, Terminal};
use crate::sim::{Flow, SimEvent, Simulation};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

const EVENT_QUEUE_DEPTH: usize = 64;

pub(crate) async fn run(settings: Settings) -> Result<()> {
    let mut term = Terminal::begin().context("could not initialise the terminal")?;
    let (w, h) = term.size()?;
    info!(
        "starting on {w}x{h}, tick {:?}, policy {:?}, redraw {:?}",
        settings.tick, settings.policy, settings.redraw
    );

    let mut sim = Simulation::new(
        usize::from(w),
        usize::from(h),
        settings.policy,
        settings.redraw,
    );

    let (tx, rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    input::spawn_poller(tx).context("could not start the input thread")?;

    let mut rng = StdRng::from_entropy();
    frame_loop(&mut sim, &mut term, rx, settings.tick, &mut rng).await
}

/// Runs until a quit event arrives. Timer ticks and input are taken in
/// whichever order they become ready; a slow tick just makes the next one late.
pub(crate) async fn frame_loop<D: Display, R: Rng>(
    sim: &mut Simulation,
    display: &mut D,
    mut events: mpsc::Receiver<SimEvent>,
    period: Duration,
    rng: &mut R,
) -> Result<()> {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            ev = events.recv() => {
                let Some(ev) = ev else {
                    bail!("input thread stopped");
                };
                match sim.handle(ev) {
                    Flow::Continue => {}
                    Flow::Resync => {
                        info!("resized to {}x{}", sim.grid().width(), sim.grid().height());
                        display.sync()?;
                    }
                    Flow::Quit => {
                        info!("quit requested");
                        break;
                    }
                }
            }
            _ = ticker.tick() => {
                let started = Instant::now();
                frame(sim, display, rng)?;
                let spent = started.elapsed();
                if spent > period {
                    debug!("tick took {spent:?}, over the {period:?} period");
                }
            }
        }
    }
    Ok(())
}

fn frame<D: Display, R: Rng>(sim: &mut Simulation, display: &mut D, rng: &mut R) -> Result<()> {
    sim.tick(rng);
    draw_dirty(display, sim.grid(), sim.dirty())?;
    display.present()
}
