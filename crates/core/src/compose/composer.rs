//! Manual-mode message composition.

use crate::customers::Customer;
use crate::utils::dates::format_dmy;

/// Substitutes `{placeholder}` tokens in a manual template with customer
/// fields. Unknown placeholders are left intact so an admin can spot a
/// typo in the rendered preview instead of silently losing text.
pub fn render_manual(content: &str, customer: &Customer) -> String {
    let due = customer.due_date.map(format_dmy).unwrap_or_default();
    let payoff = customer.payoff_date.map(format_dmy).unwrap_or_default();
    let plafon = format_plafon(customer);
    let substitutions: [(&str, &str); 8] = [
        ("{name}", customer.name.as_str()),
        ("{sentra}", customer.sentra.as_str()),
        ("{flag}", customer.raw_flag.as_str()),
        ("{phone}", customer.phone.as_deref().unwrap_or("")),
        ("{co}", customer.officer.as_str()),
        ("{plafon}", plafon.as_str()),
        ("{tglJatuhTempo}", due.as_str()),
        ("{tglLunas}", payoff.as_str()),
    ];

    let mut rendered = content.to_string();
    for (token, value) in substitutions {
        rendered = rendered.replace(token, value);
    }
    rendered
}

fn format_plafon(customer: &Customer) -> String {
    format!("Rp {}", group_thousands(&customer.plafond.to_string()))
}

/// Dots as thousands separators, the Indonesian convention.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}
