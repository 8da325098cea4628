#![allow(dead_code)]

use litenum::{declare_enum, EnumConfig};
use tracing_subscriber::EnvFilter;

declare_enum! {
    /// Card suits.
    pub Suit {
        Hearts = "H",
        Spades = "S",
        Clubs = "C",
        Diamonds = "D",
    }
}

declare_enum! {
    pub Color {
        Red = "#f00" => "warm",
        Green = "#0f0",
        Blue = "#00f" => "cool",
        Black,
    }
}

declare_enum! {
    pub Priority {
        Low = 1,
        Normal = 5,
        High = 9,
    }
}

declare_enum! {
    pub Shadowed(EnumConfig::last_wins()) {
        Open = "o",
        Closed = "c",
        OPEN = "O",
    }
}

declare_enum! {
    pub Clashing {
        Open = "o",
        OPEN = "O",
    }
}

/// Route `tracing` output through the test harness (`RUST_LOG=litenum=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
