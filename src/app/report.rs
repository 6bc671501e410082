use crate::core::calendar::format_group;
use crate::domain::model::{ExampleGroup, SimulationReport};
use crate::utils::error::Result;
use std::fmt::Write;

pub fn render_json(report: &SimulationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &SimulationReport, decimals: u32) -> String {
    let mut out = String::new();

    if let Some(example) = &report.example {
        render_example(&mut out, example);
    }

    let summary = &report.summary;
    let people = summary.group_size;
    let _ = writeln!(
        out,
        "Out of {} simulations of {} people, there was a",
        with_thousands(summary.trial_count),
        people
    );
    let _ = writeln!(
        out,
        "matching birthday in that group {} times. This means",
        summary.collision_count
    );
    let _ = writeln!(
        out,
        "that {} people have a {:.*} % chance of",
        people,
        decimals as usize,
        summary.percentage(decimals)
    );
    let _ = writeln!(out, "having a matching birthday in their group.");
    let _ = writeln!(
        out,
        "(Exact probability: {:.*} %)",
        decimals as usize,
        report.exact_probability * 100.0
    );

    out
}

fn render_example(out: &mut String, example: &ExampleGroup) {
    let _ = writeln!(out, "Here are {} birthdays:", example.birthdays.len());
    let _ = writeln!(out, "{}", format_group(&example.birthdays));
    let _ = writeln!(out);

    match example.matching {
        Some(day) => {
            let _ = writeln!(out, "Multiple people have a birthday on {}", day);
        }
        None => {
            let _ = writeln!(out, "There are no matching birthdays");
        }
    }
    let _ = writeln!(out);
}

fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Birthday, SimulationSummary};

    fn report(example: Option<ExampleGroup>) -> SimulationReport {
        SimulationReport {
            example,
            summary: SimulationSummary::new(23, 100_000, 50_729),
            exact_probability: 0.507_297,
        }
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(100_000), "100,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_render_text_summary() {
        let text = render_text(&report(None), 2);
        assert!(text.contains("Out of 100,000 simulations of 23 people"));
        assert!(text.contains("50729 times"));
        assert!(text.contains("have a 50.73 % chance"));
        assert!(text.contains("(Exact probability: 50.73 %)"));
        assert!(!text.contains("Here are"));
    }

    #[test]
    fn test_render_text_example_with_match() {
        let days: Vec<Birthday> = [0u16, 45, 0]
            .iter()
            .map(|&d| Birthday::new(d).unwrap())
            .collect();
        let example = ExampleGroup {
            matching: Birthday::new(0),
            birthdays: days,
        };
        let text = render_text(&report(Some(example)), 1);
        assert!(text.contains("Here are 3 birthdays:\nJan 1, Feb 15, Jan 1\n"));
        assert!(text.contains("Multiple people have a birthday on Jan 1"));
        assert!(text.contains("have a 50.7 % chance"));
    }

    #[test]
    fn test_render_text_example_without_match() {
        let example = ExampleGroup {
            birthdays: vec![Birthday::new(364).unwrap()],
            matching: None,
        };
        let text = render_text(&report(Some(example)), 2);
        assert!(text.contains("There are no matching birthdays"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&report(None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["collision_count"], 50_729);
        assert!(value["example"].is_null());
    }
}
