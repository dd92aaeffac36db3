//! Fake subsystem initialization animations.
//!
//! Two open-loop sequences: a per-module checklist and the master power bar.
//! Both redraw a single line in place on a fixed tick.

use colored::Colorize;
use log::debug;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::Result;
use crate::modules::ModuleSelection;
use crate::terminal::Console;

const FILLED: char = '█';
const EMPTY: char = '░';

const CHECKLIST_STEPS: u32 = 10;
const CHECKLIST_BAR_LEN: u32 = 20;
const LABEL_WIDTH: usize = 22;

const POWER_STEPS: u32 = 20;
const POWER_BAR_LEN: u32 = 30;

/// One frame of a progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    pub percent: u32,
    pub bar: String,
}

impl AnimationStep {
    /// Frame `step` of `total_steps` for a bar `bar_len` cells wide.
    pub fn at(step: u32, total_steps: u32, bar_len: u32) -> Self {
        let step = step.min(total_steps);
        let percent = ratio_round(100 * step, total_steps);
        let filled = ratio_round(bar_len * step, total_steps);
        Self {
            percent,
            bar: bar(filled, bar_len),
        }
    }
}

/// `num / den` rounded half up.
fn ratio_round(num: u32, den: u32) -> u32 {
    if den == 0 {
        return 0;
    }
    (2 * num + den) / (2 * den)
}

fn bar(filled: u32, len: u32) -> String {
    let filled = filled.min(len) as usize;
    let mut s = String::with_capacity(len as usize * 3);
    s.extend(std::iter::repeat_n(FILLED, filled));
    s.extend(std::iter::repeat_n(EMPTY, len as usize - filled));
    s
}

/// Tick lengths for both animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTiming {
    pub checklist_step_ms: u64,
    pub checklist_pause_ms: u64,
    pub power_step_ms: u64,
}

impl Default for ProgressTiming {
    fn default() -> Self {
        Self {
            checklist_step_ms: 40,
            checklist_pause_ms: 150,
            power_step_ms: 50,
        }
    }
}

pub struct ProgressAnimator {
    console: Console,
    timing: ProgressTiming,
}

impl ProgressAnimator {
    pub fn new(console: Console, timing: ProgressTiming) -> Self {
        Self { console, timing }
    }

    /// Fill one labelled bar per selected module, in selection order.
    pub async fn run_checklist<W: Write>(&self, out: &mut W, selection: &ModuleSelection) -> Result<()> {
        self.console.blank(out)?;
        self.console
            .line(out, "INITIALIZING SELECTED SUBSYSTEMS...".cyan())?;

        for module in selection.iter() {
            debug!("Initializing module {}", module);
            let label = format!("{:<width$}", module.display_name(), width = LABEL_WIDTH);

            for i in 0..=CHECKLIST_STEPS {
                let step = AnimationStep::at(i, CHECKLIST_STEPS, CHECKLIST_BAR_LEN);
                self.console.redraw(
                    out,
                    format!("{} {} [{}] {}%", ">".cyan(), label, step.bar.yellow(), step.percent),
                )?;
                sleep(Duration::from_millis(self.timing.checklist_step_ms)).await;
            }

            let full = bar(CHECKLIST_BAR_LEN, CHECKLIST_BAR_LEN);
            self.console.redraw(
                out,
                format!("{} {} [{}] {}   ", "✔".green(), label, full.green(), "OK".green()),
            )?;
            self.console.blank(out)?;
            self.console.bell(out)?;
            sleep(Duration::from_millis(self.timing.checklist_pause_ms)).await;
        }
        Ok(())
    }

    /// Master power bar, 0 to 100% in 5% steps with a cue per step.
    pub async fn run_power_bar<W: Write>(&self, out: &mut W) -> Result<()> {
        self.console.blank(out)?;
        for i in 0..=POWER_STEPS {
            let step = AnimationStep::at(i, POWER_STEPS, POWER_BAR_LEN);
            self.console.redraw(
                out,
                format!("{} [{}] {}% ", "Main Power:".cyan(), step.bar.green(), step.percent),
            )?;
            self.console.bell(out)?;
            sleep(Duration::from_millis(self.timing.power_step_ms)).await;
        }
        self.console.blank(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::Module;
    use tokio::time::Instant;

    fn animator(bell: bool) -> ProgressAnimator {
        colored::control::set_override(false);
        ProgressAnimator::new(Console::new(2, bell), ProgressTiming::default())
    }

    #[test]
    fn test_checklist_steps() {
        let first = AnimationStep::at(0, 10, 20);
        assert_eq!(first.percent, 0);
        assert_eq!(first.bar, "░".repeat(20));

        let mid = AnimationStep::at(5, 10, 20);
        assert_eq!(mid.percent, 50);
        assert_eq!(mid.bar, format!("{}{}", "█".repeat(10), "░".repeat(10)));

        let last = AnimationStep::at(10, 10, 20);
        assert_eq!(last.percent, 100);
        assert_eq!(last.bar, "█".repeat(20));
    }

    #[test]
    fn test_power_steps_round_half_up() {
        // 30 * 1 / 20 = 1.5 cells
        let step = AnimationStep::at(1, 20, 30);
        assert_eq!(step.percent, 5);
        assert_eq!(step.bar.chars().filter(|&c| c == '█').count(), 2);

        let step = AnimationStep::at(13, 20, 30);
        assert_eq!(step.percent, 65);
        assert_eq!(step.bar.chars().filter(|&c| c == '█').count(), 20);
    }

    #[test]
    fn test_steps_are_monotonic_and_full_width() {
        let mut last = 0;
        for i in 0..=20 {
            let step = AnimationStep::at(i, 20, 30);
            assert_eq!(step.bar.chars().count(), 30);
            assert!(step.percent >= last);
            last = step.percent;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_step_past_end_is_clamped() {
        assert_eq!(AnimationStep::at(15, 10, 20), AnimationStep::at(10, 10, 20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checklist_renders_each_module_in_order() {
        let anim = animator(true);
        let selection = ModuleSelection::new(vec![Module::VHull, Module::Ai]).unwrap();
        let mut out = Vec::new();
        let start = Instant::now();

        anim.run_checklist(&mut out, &selection).await.unwrap();

        // 11 ticks of 40ms + 150ms pause per module
        assert_eq!(start.elapsed(), Duration::from_millis(2 * (11 * 40 + 150)));

        let text = String::from_utf8(out).unwrap();
        let vhull = text.find("✔ V-Hull Geometry Unit").unwrap();
        let ai = text.find("✔ AI Price Core").unwrap();
        assert!(vhull < ai);
        assert_eq!(text.matches(" OK").count(), 2);
        assert_eq!(text.matches("100%").count(), 2);
        assert_eq!(text.matches('\x07').count(), 2);
        assert!(text.contains(&format!("> {:<22} [", "AI Price Core")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_power_bar_ticks() {
        let anim = animator(true);
        let mut out = Vec::new();
        let start = Instant::now();

        anim.run_power_bar(&mut out).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(21 * 50));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Main Power:").count(), 21);
        assert_eq!(text.matches('\x07').count(), 21);
        assert!(text.contains(&format!("[{}] 100% ", "█".repeat(30))));
        assert!(text.ends_with("\r\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_bell_when_disabled() {
        let anim = animator(false);
        let mut out = Vec::new();
        anim.run_power_bar(&mut out).await.unwrap();
        assert!(!out.contains(&0x07));
    }
}
