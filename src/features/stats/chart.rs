//! Terminal bar charts.

const FULL_BLOCK: char = '█';

/// Render labelled horizontal bars scaled to the largest value.
///
/// Labels longer than `max_label_width` are truncated with `...`.
#[must_use]
pub fn render_bar_chart(data: &[(String, usize)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    data.iter()
        .map(|(label, value)| {
            let label = fit_label(label, max_label_width);
            let bar_length = value * bar_width / max_value;
            let bar = FULL_BLOCK.to_string().repeat(bar_length);
            let padding = " ".repeat(bar_width - bar_length);
            format!("{label} |{bar}{padding} {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn fit_label(label: &str, width: usize) -> String {
    if label.chars().count() > width && width > 3 {
        let kept: String = label.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        format!("{label:width$}")
    }
}
