//! Prompt construction for the generative composer.

use sentra_core::agenda::CommunicationStrategy;
use sentra_core::customers::Customer;
use sentra_core::utils::dates::format_dmy;

/// Framing instruction per strategy. The strategy is derived in core so
/// the agenda views and this prompt can never disagree on tone.
fn strategy_instruction(strategy: CommunicationStrategy) -> &'static str {
    match strategy {
        CommunicationStrategy::CollectionsHard => {
            "Nasabah ini menunggak cukup lama. Tulis pengingat pembayaran yang tegas namun tetap sopan dan menjaga hubungan baik."
        }
        CommunicationStrategy::CollectionsSoft => {
            "Nasabah ini baru beberapa hari melewati jatuh tempo. Tulis pengingat pembayaran yang lembut, beri kesan bahwa ini hanya pengingat biasa."
        }
        CommunicationStrategy::SavingsReminder => {
            "Saldo tabungan nasabah ini tidak cukup untuk menutup angsuran berikutnya. Ajak nasabah menambah saldo tabungannya sebelum tanggal penarikan."
        }
        CommunicationStrategy::RefinancingOffer => {
            "Pembiayaan nasabah ini akan segera jatuh tempo. Tawarkan pembiayaan ulang dengan nada apresiatif atas kelancaran pembayarannya."
        }
        CommunicationStrategy::Winback => {
            "Nasabah ini sudah lunas dan keluar beberapa bulan lalu. Ajak nasabah kembali mengambil pembiayaan, ingatkan pengalaman baik sebelumnya."
        }
        CommunicationStrategy::RelationshipKeeping => {
            "Tidak ada keperluan mendesak. Tulis pesan silaturahmi singkat untuk menjaga hubungan baik dengan nasabah."
        }
    }
}

/// Builds the single-shot prompt for one customer.
///
/// `context` is the template's free-text guidance, appended verbatim so
/// admins can steer tone without a code change.
pub fn build_prompt(
    customer: &Customer,
    strategy: CommunicationStrategy,
    context: &str,
) -> String {
    let mut lines = vec![
        "Kamu adalah petugas lapangan lembaga pembiayaan syariah yang menulis pesan WhatsApp untuk nasabah binaan."
            .to_string(),
        "Tulis satu pesan singkat dalam Bahasa Indonesia yang ramah dan sesuai adab, tanpa salam pembuka berlebihan, maksimal empat kalimat."
            .to_string(),
        String::new(),
        strategy_instruction(strategy).to_string(),
        String::new(),
        "Data nasabah:".to_string(),
        format!("- Nama: {}", customer.name),
    ];
    if !customer.sentra.is_empty() {
        lines.push(format!("- Sentra: {}", customer.sentra));
    }
    if !customer.officer.is_empty() {
        lines.push(format!("- Petugas (CO): {}", customer.officer));
    }
    if customer.dpd > 0 {
        lines.push(format!("- Hari tunggakan: {}", customer.dpd));
    }
    if let Some(due_date) = customer.due_date {
        lines.push(format!("- Tanggal jatuh tempo: {}", format_dmy(due_date)));
    }
    if let Some(payoff_date) = customer.payoff_date {
        lines.push(format!("- Tanggal lunas: {}", format_dmy(payoff_date)));
    }
    if !customer.plafond.is_zero() {
        lines.push(format!("- Plafon: Rp {}", customer.plafond));
    }
    if let Some(notes) = customer.notes.as_deref().filter(|n| !n.is_empty()) {
        lines.push(format!("- Catatan petugas: {notes}"));
    }

    let context = context.trim();
    if !context.is_empty() {
        lines.push(String::new());
        lines.push(format!("Arahan tambahan: {context}"));
    }

    lines.push(String::new());
    lines.push("Balas hanya dengan isi pesannya, tanpa penjelasan.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentra_core::customers::{ingest_customers, parse_sheet, FieldMapping};

    fn customer(headers: &str, row: &str) -> Customer {
        let sheet = parse_sheet(&format!("{}\n{}", headers, row)).unwrap();
        ingest_customers(&sheet, &FieldMapping::default())
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_prompt_carries_customer_facts() {
        let c = customer(
            "Nama Nasabah,Sentra,CO,DPD,Tgl Jatuh Tempo",
            "Siti Aminah,Melati,Andi,12,05/09/2025",
        );
        let prompt = build_prompt(&c, CommunicationStrategy::CollectionsHard, "");
        assert!(prompt.contains("Nama: Siti Aminah"));
        assert!(prompt.contains("Sentra: Melati"));
        assert!(prompt.contains("Hari tunggakan: 12"));
        assert!(prompt.contains("Tanggal jatuh tempo: 05/09/2025"));
        assert!(prompt.contains("tegas"));
    }

    #[test]
    fn test_prompt_appends_template_context() {
        let c = customer("Nama Nasabah", "Siti");
        let prompt = build_prompt(
            &c,
            CommunicationStrategy::Winback,
            "Sebut program tabungan haji.",
        );
        assert!(prompt.contains("Arahan tambahan: Sebut program tabungan haji."));
    }

    #[test]
    fn test_prompt_omits_absent_fields() {
        let c = customer("Nama Nasabah", "Siti");
        let prompt = build_prompt(&c, CommunicationStrategy::RelationshipKeeping, "");
        assert!(!prompt.contains("Tanggal jatuh tempo"));
        assert!(!prompt.contains("Hari tunggakan"));
        assert!(!prompt.contains("Arahan tambahan"));
    }

    #[test]
    fn test_each_strategy_has_distinct_instruction() {
        use CommunicationStrategy::*;
        let all = [
            CollectionsHard,
            CollectionsSoft,
            SavingsReminder,
            RefinancingOffer,
            Winback,
            RelationshipKeeping,
        ];
        let mut instructions: Vec<&str> =
            all.iter().map(|s| strategy_instruction(*s)).collect();
        instructions.sort();
        instructions.dedup();
        assert_eq!(instructions.len(), all.len());
    }
}
