use mealplan_core::model::{Location, MealSlot, Plan};

use super::OutputFormat;

pub fn format_plan<P: Plan>(plan: &P, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(plan).unwrap_or_default(),
        OutputFormat::Text => format_plan_text(plan),
        OutputFormat::Markdown => format_plan_markdown(plan),
    }
}

fn format_plan_text<P: Plan>(plan: &P) -> String {
    let mut out = String::new();
    let mut current_day = None;

    for at in P::locations() {
        let day = at.day();
        if current_day != Some(day) {
            out.push_str(day.name());
            out.push('\n');
            current_day = Some(day);
        }
        let indent = match at.slot() {
            Some(slot) => {
                out.push_str(&format!("  {}\n", slot_heading(slot)));
                "    "
            }
            None => "  ",
        };
        push_numbered(&mut out, plan.items(at), indent);
    }
    out
}

fn format_plan_markdown<P: Plan>(plan: &P) -> String {
    let mut out = String::from("# Meal Plan\n");
    let mut current_day = None;

    for at in P::locations() {
        let day = at.day();
        if current_day != Some(day) {
            out.push_str(&format!("\n## {}\n", day.name()));
            current_day = Some(day);
        }
        if let Some(slot) = at.slot() {
            out.push_str(&format!("\n### {}\n", slot.label()));
        }
        out.push('\n');
        push_bullets(&mut out, plan.items(at));
    }
    out
}

/// Render a single list, numbered so indices can be passed to `remove`.
pub fn format_items<P: Plan>(plan: &P, at: P::Location, fmt: OutputFormat) -> String {
    let items = plan.items(at);
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(items).unwrap_or_default(),
        OutputFormat::Text => {
            let mut out = format!("{}\n", heading(at));
            push_numbered(&mut out, items, "  ");
            out
        }
        OutputFormat::Markdown => {
            let mut out = format!("## {}\n\n", heading(at));
            push_bullets(&mut out, items);
            out
        }
    }
}

fn heading<L: Location>(at: L) -> String {
    match at.slot() {
        Some(slot) => format!("{} {}", at.day().name(), slot_heading(slot)),
        None => at.day().name().to_string(),
    }
}

/// Snack slots share a label, so the identifier disambiguates them.
fn slot_heading(slot: MealSlot) -> String {
    format!("{} ({})", slot.label(), slot)
}

fn push_numbered(out: &mut String, items: &[String], indent: &str) {
    if items.is_empty() {
        out.push_str(&format!("{indent}-\n"));
    }
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{indent}{i}. {item}\n"));
    }
}

fn push_bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("_(empty)_\n");
    }
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

pub fn format_slots(fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let slots: Vec<_> = MealSlot::ALL
                .into_iter()
                .map(|s| serde_json::json!({ "slot": s.as_str(), "label": s.label() }))
                .collect();
            serde_json::to_string_pretty(&slots).unwrap_or_default()
        }
        OutputFormat::Text => MealSlot::ALL
            .into_iter()
            .map(|s| format!("{:<10} {}\n", s.as_str(), s.label()))
            .collect(),
        OutputFormat::Markdown => {
            let mut out = String::from("| Slot | Label |\n|------|-------|\n");
            for s in MealSlot::ALL {
                out.push_str(&format!("| `{}` | {} |\n", s.as_str(), s.label()));
            }
            out
        }
    }
}
