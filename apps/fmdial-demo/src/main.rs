//! Scripted, headless FM dial session.
//!
//! Usage: `fmdial-demo [start-frequency] [width-px]`

mod shell;
mod strip;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use fmdial_foundation::PointerEvent;
use fmdial_graphics::Dp;
use fmdial_ui::{DialConfig, FrequencyDial, ScaleConfig};

use crate::shell::DemoShell;

const DEFAULT_WIDTH: f32 = 360.0;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut args = std::env::args().skip(1);
    let start_frequency: f64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("start frequency {arg:?} is not a number"))?,
        None => 99.5,
    };
    let width: f32 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("width {arg:?} is not a number"))?,
        None => DEFAULT_WIDTH,
    };
    if width <= 0.0 {
        bail!("width must be positive, got {width}");
    }

    let scale = ScaleConfig::new(210, 0.1, 87.0, Dp(6.0), 10)
        .context("building the FM scale")?
        .with_unit_label("MHz");
    let dial = FrequencyDial::new(DialConfig {
        scale,
        ..DialConfig::default()
    });

    let mut shell = DemoShell::new(dial, width);
    shell
        .dial_mut()
        .set_on_frequency_change_listener(|value| log::debug!("frequency {value:.1} MHz"));

    shell.dial_mut().set_frequency(start_frequency);
    if (shell.dial().frequency() - start_frequency).abs() > 0.05 {
        log::warn!(
            "{start_frequency} MHz is off the dial; staying at {:.1}",
            shell.dial().frequency()
        );
    }
    println!("{}\n", shell.update());

    let y = shell.viewport().height / 2.0;
    let centre = shell.viewport().width / 2.0;

    println!("-- slow drag two marks up");
    drag(&mut shell, centre, centre - 12.0, y, Duration::from_millis(30));
    println!("{}\n", shell.run_until_idle());

    println!("-- fling towards higher frequencies");
    drag(&mut shell, centre + 100.0, centre - 100.0, y, Duration::from_millis(8));
    println!("{}\n", shell.run_until_idle());

    println!("-- fling back down");
    drag(&mut shell, centre - 100.0, centre + 100.0, y, Duration::from_millis(8));
    println!("{}\n", shell.run_until_idle());

    println!(
        "settled on {:.1} MHz after {} frames",
        shell.dial().frequency(),
        shell.frames()
    );
    Ok(())
}

/// Ten evenly spaced moves `step` apart. Slow steps leave a pause before
/// the release so the dial settles instead of flinging.
fn drag(shell: &mut DemoShell, from_x: f32, to_x: f32, y: f32, step: Duration) {
    shell.dispatch(PointerEvent::down(from_x, y, shell.uptime_ms()));
    for i in 1..=10 {
        std::thread::sleep(step);
        let x = from_x + (to_x - from_x) * i as f32 / 10.0;
        shell.dispatch(PointerEvent::moved(x, y, shell.uptime_ms()));
    }
    if step > Duration::from_millis(20) {
        std::thread::sleep(Duration::from_millis(100));
    }
    shell.dispatch(PointerEvent::up(to_x, y, shell.uptime_ms()));
}
