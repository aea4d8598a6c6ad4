// src/report.rs

//! Plain-text balancing report.
//!
//! ```text
//! Order for WET: 9, 3, 5, 12
//! WET, c = 17
//!   ST(1) 5(7) 2(6) 4(4)
//!   LE = 95.59%
//!   SI = 2.24
//!   T = 68
//! ```

use std::io::Write;

use crate::balance::Balance;
use crate::dag::Task;
use crate::errors::Result;
use crate::ordering::Method;

/// `Order for <METHOD>: <id>, <id>, ...`
pub fn write_order(out: &mut impl Write, method: Method, sequence: &[&Task]) -> Result<()> {
    let ids = sequence
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Order for {method}: {ids}")?;
    Ok(())
}

/// One cycle-time attempt: station contents followed by LE, SI and T.
pub fn write_attempt(out: &mut impl Write, method: Method, balance: &Balance) -> Result<()> {
    writeln!(out, "{method}, c = {}", balance.cycle_time())?;

    for (i, station) in balance.stations().iter().enumerate() {
        let tasks = station
            .tasks()
            .iter()
            .map(|t| format!("{}({})", t.id, t.duration))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "  ST({}) {tasks}", i + 1)?;
    }

    writeln!(out, "  LE = {:.2}%", balance.line_efficiency())?;
    writeln!(out, "  SI = {:.2}", balance.smoothness_index())?;
    writeln!(out, "  T = {}", balance.line_time())?;
    Ok(())
}

