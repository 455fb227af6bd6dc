use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "termisand")]
#[command(about = "Falling sand poured from the mouse pointer")]
pub(crate) struct Cli {
    /// milliseconds per simulation tick
    #[arg(long, default_value_t = 20)]
    pub(crate) ms: u64,

    /// what to do when the pointer sits on a cell that already holds sand
    #[arg(long, value_enum, default_value_t = InjectPolicy::Gate)]
    pub(crate) policy: InjectPolicy,

    /// how changed cells are found each tick
    #[arg(long, value_enum, default_value_t = RedrawMode::Moves)]
    pub(crate) redraw: RedrawMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum InjectPolicy {
    /// spawn only when the pointer cell is empty
    #[default]
    Gate,
    /// always repaint the pointer cell with the current hue
    Overwrite,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum RedrawMode {
    /// record the cells each move and spawn touches
    #[default]
    Moves,
    /// compare the whole grid against the last drawn frame
    Diff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) tick: Duration,
    pub(crate) policy: InjectPolicy,
    pub(crate) redraw: RedrawMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(20),
            policy: InjectPolicy::default(),
            redraw: RedrawMode::default(),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            tick: Duration::from_millis(cli.ms.max(1)),
            policy: cli.policy,
            redraw: cli.redraw,
        }
    }
}
