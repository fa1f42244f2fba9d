//! Plain-text views of a chart

use crate::alignment::{AlignmentCategory, MoralAxis, OrderAxis};
use crate::chart::{Chart, Slot};
use serde_yaml::Value;

/// Shown instead of an empty listing
pub const EMPTY_CHART_TEXT: &str = "No alignments set yet.";

/// One `"{display_name} — {alignment}"` line per member, in stored order
///
/// Returns [`EMPTY_CHART_TEXT`] for a chart without entries. Unreadable
/// entries are shown with whatever `display_name` and `alignment` text they
/// carry, falling back to the member id and `?`.
#[must_use]
pub fn render_lines(chart: &Chart) -> String {
    if chart.is_empty() {
        return EMPTY_CHART_TEXT.to_string();
    }

    chart
        .users
        .iter()
        .map(|(id, slot)| match slot {
            Slot::Entry(entry) => format!("{} — {}", entry.display_name, entry.alignment),
            Slot::Unreadable(raw) => format!(
                "{} — {}",
                text_field(raw, "display_name").unwrap_or(id.as_str()),
                text_field(raw, "alignment").unwrap_or("?"),
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

/// 3x3 grid of member counts, Good row on top and Lawful column first
#[must_use]
pub fn render_tally(chart: &Chart) -> String {
    let tally = chart.tally();
    let count = |a: AlignmentCategory| {
        tally
            .iter()
            .find(|(cat, _)| *cat == a)
            .map_or(0, |(_, n)| *n)
    };

    let mut out = format!("{:<8}{:>8}{:>8}{:>8}", "", "Lawful", "Neutral", "Chaotic");
    for (label, moral) in [
        ("Good", MoralAxis::Good),
        ("Neutral", MoralAxis::Neutral),
        ("Evil", MoralAxis::Evil),
    ] {
        out.push('\n');
        out.push_str(&format!("{label:<8}"));
        for order in [OrderAxis::Lawful, OrderAxis::Neutral, OrderAxis::Chaotic] {
            out.push_str(&format!("{:>8}", count(AlignmentCategory::from_axes(order, moral))));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::set_user;

    #[test]
    fn empty_chart_message() {
        assert_eq!(render_lines(&Chart::new()), "No alignments set yet.");
    }

    #[test]
    fn one_line_per_user_in_order() {
        let chart = set_user(&Chart::new(), "2", AlignmentCategory::ChaoticGood, "Zed", None);
        let chart = set_user(&chart, "1", AlignmentCategory::LawfulEvil, "Amy", None);

        assert_eq!(
            render_lines(&chart),
            "Zed — Chaotic Good\nAmy — Lawful Evil"
        );
    }

    #[test]
    fn unreadable_entries_render_best_effort() {
        let yaml = "\
users:
  '1':
    alignment: Lawful Good
    display_name: Amy
  '2':
    alignment: Lawful Awesome
    display_name: Bo
  '3': 17
";
        let chart = crate::codec::parse(yaml.as_bytes()).unwrap();
        assert_eq!(
            render_lines(&chart),
            "Amy — Lawful Good\nBo — Lawful Awesome\n3 — ?"
        );
        assert_eq!(chart.tally().iter().map(|(_, n)| n).sum::<usize>(), 1);
    }

    #[test]
    fn tally_grid_layout() {
        let chart = set_user(&Chart::new(), "1", AlignmentCategory::ChaoticGood, "A", None);
        let chart = set_user(&chart, "2", AlignmentCategory::ChaoticGood, "B", None);
        let chart = set_user(&chart, "3", AlignmentCategory::TrueNeutral, "C", None);

        let grid = render_tally(&chart);
        let lines: Vec<_> = grid.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Lawful") && lines[0].contains("Chaotic"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["Good", "0", "0", "2"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["Neutral", "0", "1", "0"]);
        assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["Evil", "0", "0", "0"]);
    }
}
