//! Text and JSON Lines rendering for command output.
//!
//! Every writer takes `&mut impl Write` so commands can be exercised against
//! an in-memory buffer. JSON mode emits one object per line, each tagged
//! with an `event` field.

use std::io::Write;

use serde_json::json;
use sortrace_core::{Algorithm, Metrics, Operation, Trace};
use sortrace_runtime::PlaybackController;
use web_time::Duration;

use crate::error::Result;

fn write_json_line(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

pub fn write_catalogue(out: &mut impl Write, json: bool) -> Result<()> {
    if !json {
        writeln!(
            out,
            "{:<10} {:<16} {:<11} {:<11} {:<11} {:<9} STABLE",
            "NAME", "ALGORITHM", "BEST", "AVERAGE", "WORST", "SPACE"
        )?;
    }
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        if json {
            write_json_line(
                out,
                &json!({
                    "event": "algorithm",
                    "slug": algorithm.slug(),
                    "name": algorithm.name(),
                    "comparison_based": algorithm.is_comparison_based(),
                    "info": info,
                }),
            )?;
        } else {
            writeln!(
                out,
                "{:<10} {:<16} {:<11} {:<11} {:<11} {:<9} {}",
                algorithm.slug(),
                algorithm.name(),
                info.best,
                info.average,
                info.worst,
                info.space,
                if info.stable { "yes" } else { "no" },
            )?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

pub fn write_trace(out: &mut impl Write, trace: &Trace, metrics: &Metrics, json: bool) -> Result<()> {
    if json {
        for (step, op) in trace.operations().iter().enumerate() {
            write_json_line(out, &json!({ "event": "operation", "step": step + 1, "op": op }))?;
        }
        return write_json_line(out, &summary_json(trace, metrics));
    }

    writeln!(
        out,
        "{}: {} operations on {} elements",
        trace.algorithm(),
        trace.len(),
        trace.input().len()
    )?;
    for (step, op) in trace.operations().iter().enumerate() {
        writeln!(out, "{:>6}  {op}", step + 1)?;
    }
    write_summary_text(out, trace, metrics)
}

fn summary_json(trace: &Trace, metrics: &Metrics) -> serde_json::Value {
    json!({
        "event": "summary",
        "algorithm": trace.algorithm().name(),
        "input": trace.input(),
        "final": trace.final_array(),
        "operations": trace.len(),
        "counts": trace.summary(),
        "comparisons": metrics.comparisons(),
        "swaps": metrics.swaps(),
        "elapsed_us": duration_us(metrics.elapsed()),
    })
}

fn write_summary_text(out: &mut impl Write, trace: &Trace, metrics: &Metrics) -> Result<()> {
    writeln!(out, "input:       {:?}", trace.input())?;
    writeln!(out, "final:       {:?}", trace.final_array())?;
    writeln!(out, "comparisons: {}", metrics.comparisons())?;
    writeln!(out, "swaps:       {}", metrics.swaps())?;
    writeln!(out, "elapsed:     {}us", duration_us(metrics.elapsed()))?;
    Ok(())
}

fn duration_us(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

pub fn write_play_start(out: &mut impl Write, player: &PlaybackController, json: bool) -> Result<()> {
    if json {
        return write_json_line(
            out,
            &json!({
                "event": "start",
                "algorithm": player.trace().algorithm().name(),
                "position": player.position(),
                "len": player.len(),
                "speed": player.speed(),
                "step_delay_ms": player.step_delay().as_secs_f64() * 1000.0,
                "array": player.current_array(),
            }),
        );
    }
    writeln!(
        out,
        "{} from step {}/{} at {}x ({:?} per step): {:?}",
        player.trace().algorithm(),
        player.position(),
        player.len(),
        player.speed(),
        player.step_delay(),
        player.current_array()
    )?;
    Ok(())
}

/// One applied step. `array` is the derived array after `op`.
pub fn write_play_step(
    out: &mut impl Write,
    position: usize,
    len: usize,
    clock: Duration,
    op: &Operation,
    array: &[i32],
    json: bool,
) -> Result<()> {
    let t_ms = clock.as_secs_f64() * 1000.0;
    if json {
        return write_json_line(
            out,
            &json!({
                "event": "step",
                "position": position,
                "len": len,
                "t_ms": t_ms,
                "op": op,
                "array": array,
            }),
        );
    }
    let width = len.to_string().len();
    writeln!(
        out,
        "[{position:>width$}/{len}] t={t_ms:>9.1}ms  {:<16} {array:?}",
        op.to_string()
    )?;
    Ok(())
}

pub fn write_play_end(out: &mut impl Write, player: &PlaybackController, clock: Duration, json: bool) -> Result<()> {
    let t_ms = clock.as_secs_f64() * 1000.0;
    if json {
        return write_json_line(
            out,
            &json!({
                "event": "end",
                "state": player.state().as_str(),
                "position": player.position(),
                "t_ms": t_ms,
                "final": player.current_array(),
            }),
        );
    }
    writeln!(
        out,
        "{} after {t_ms:.1}ms: {:?}",
        player.state(),
        player.current_array()
    )?;
    Ok(())
}
