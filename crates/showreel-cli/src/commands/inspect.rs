use anyhow::{anyhow, Result};
use serde_json::json;

use showreel_core::carousel::{ArrowKey, FixedViewport, NavInput, SwipeDirection};
use showreel_core::{AppConfig, Carousel, CarouselView};

/// One entry of an `--input` sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Input(NavInput),
    /// Change the viewport width, in pixels
    Resize(u32),
}

/// Parse a comma-separated input sequence, keeping each token next to its
/// step. Blank entries are skipped.
pub fn parse_sequence(seq: &str) -> Result<Vec<(&str, Step)>> {
    seq.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| Ok((token, parse_step(token)?)))
        .collect()
}

fn parse_step(token: &str) -> Result<Step> {
    let lower = token.to_ascii_lowercase();
    let step = match lower.as_str() {
        "left" => Step::Input(NavInput::Arrow(ArrowKey::Left)),
        "right" => Step::Input(NavInput::Arrow(ArrowKey::Right)),
        "prev" => Step::Input(NavInput::PrevControl),
        "next" => Step::Input(NavInput::NextControl),
        "swipe-left" => Step::Input(NavInput::Swipe(SwipeDirection::Left)),
        "swipe-right" => Step::Input(NavInput::Swipe(SwipeDirection::Right)),
        other => {
            if let Some(group) = other.strip_prefix("dot:") {
                let group = group
                    .parse()
                    .map_err(|_| anyhow!("Invalid dot group in '{}'", token))?;
                Step::Input(NavInput::Dot(group))
            } else if let Some(window) = other.strip_prefix("window:") {
                let window = window
                    .parse()
                    .map_err(|_| anyhow!("Invalid window in '{}'", token))?;
                Step::Input(NavInput::Window(window))
            } else if let Some(width) = other.strip_prefix("resize:") {
                let width = width
                    .trim_end_matches("px")
                    .parse()
                    .map_err(|_| anyhow!("Invalid width in '{}'", token))?;
                Step::Resize(width)
            } else {
                return Err(anyhow!("Unknown input '{}'", token));
            }
        }
    };
    Ok(step)
}

pub fn run(config: &AppConfig, len: usize, width: u32, input: &str, json: bool) -> Result<()> {
    let steps = parse_sequence(input)?;
    let mut carousel = Carousel::from_config(&config.carousel, len, FixedViewport(width));

    print_view("start", &carousel.view(), json)?;

    for (token, step) in steps {
        apply(&mut carousel, step);
        print_view(token, &carousel.view(), json)?;
    }

    Ok(())
}

fn apply(carousel: &mut Carousel<FixedViewport>, step: Step) {
    match step {
        Step::Input(input) => {
            carousel.handle(input);
        }
        Step::Resize(width) => {
            carousel.source_mut().set(width);
            carousel.refresh_viewport();
        }
    }
}

fn print_view(step: &str, view: &CarouselView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&json!({ "step": step, "view": view }))?);
        return Ok(());
    }

    let dots = match &view.indicator {
        Some(indicator) => indicator
            .dots()
            .map(|(_, active)| if active { "●" } else { "○" })
            .collect::<String>(),
        None => "-".to_string(),
    };
    let controls = format!(
        "{}{}",
        if view.controls.show_prev { "<" } else { " " },
        if view.controls.show_next { ">" } else { " " },
    );

    println!(
        "{:<14} {:<7} index={:<2} offset={:>8.2}% dots={:<5} controls=[{}]",
        step,
        view.mode.label(),
        view.index,
        view.offset.offset_percent,
        dots,
        controls,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        let parsed = parse_sequence("right, swipe-left,dot:2 ,resize:500px,prev").unwrap();
        let steps: Vec<Step> = parsed.iter().map(|(_, step)| *step).collect();
        assert_eq!(parsed[1].0, "swipe-left");
        assert_eq!(
            steps,
            vec![
                Step::Input(NavInput::Arrow(ArrowKey::Right)),
                Step::Input(NavInput::Swipe(SwipeDirection::Left)),
                Step::Input(NavInput::Dot(2)),
                Step::Resize(500),
                Step::Input(NavInput::PrevControl),
            ]
        );
    }

    #[test]
    fn test_parse_empty_sequence() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_sequence("up").is_err());
        assert!(parse_sequence("dot:x").is_err());
        assert!(parse_sequence("resize:").is_err());
        assert!(parse_sequence("window:-1").is_err());
    }

    #[test]
    fn test_sequence_drives_engine() {
        let config = AppConfig::default();
        let mut carousel = Carousel::from_config(&config.carousel, 7, FixedViewport(1024));
        for (_, step) in parse_sequence("left,resize:400,swipe-left,resize:1024").unwrap() {
            apply(&mut carousel, step);
        }
        // desktop wrapped to 4 and survives the mobile excursion
        assert_eq!(carousel.view().index, 4);
        assert_eq!(carousel.state().mobile_index(), 1);

        for (_, step) in parse_sequence("window:0,next,window:99").unwrap() {
            apply(&mut carousel, step);
        }
        assert_eq!(carousel.view().index, 4);
    }
}
