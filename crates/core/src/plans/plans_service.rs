use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde_json::json;
use uuid::Uuid;

use sentra_sheets::{SheetFetcher, SheetTab, SheetWriter};

use crate::customers::{parse_sheet, ParsedSheet};
use crate::plans::{DailyPlan, NewDailyPlan, PlanNumbers, PlanServiceTrait};
use crate::utils::dates::{format_dmy, parse_dmy};
use crate::utils::money::parse_currency_tolerant;
use crate::Result;

/// Service for the append-only daily plan history, stored on its own
/// sheet tab and written through the webhook.
pub struct PlanService {
    fetcher: Arc<dyn SheetFetcher>,
    writer: Arc<dyn SheetWriter>,
    plan_tab: SheetTab,
}

impl PlanService {
    pub fn new(
        fetcher: Arc<dyn SheetFetcher>,
        writer: Arc<dyn SheetWriter>,
        plan_tab: SheetTab,
    ) -> Self {
        Self {
            fetcher,
            writer,
            plan_tab,
        }
    }
}

#[async_trait]
impl PlanServiceTrait for PlanService {
    async fn list_plans(&self, officer: Option<&str>) -> Result<Vec<DailyPlan>> {
        let csv_text = self.fetcher.fetch_tab(&self.plan_tab).await?;
        let sheet = parse_sheet(&csv_text)?;
        let mut plans = ingest_plans(&sheet);
        if let Some(officer) = officer {
            plans.retain(|p| p.officer.eq_ignore_ascii_case(officer));
        }
        debug!("Loaded {} plan records", plans.len());
        Ok(plans)
    }

    async fn create_plan(&self, new_plan: NewDailyPlan) -> Result<DailyPlan> {
        let plan = DailyPlan {
            id: Uuid::new_v4().to_string(),
            officer: new_plan.officer,
            date: new_plan.date,
            targets: new_plan.targets,
            actuals: new_plan.actuals,
        };
        self.writer
            .post(
                "appendPlan",
                json!({
                    "plan": {
                        "id": plan.id,
                        "officer": plan.officer,
                        "date": format_dmy(plan.date),
                        "targets": plan.targets,
                        "actuals": plan.actuals,
                    }
                }),
            )
            .await?;
        Ok(plan)
    }
}

/// Builds plan records from the plan tab.
///
/// Same silent-skip contract as customer ingestion: a row without a
/// parseable date or an officer is not a plan and is dropped.
fn ingest_plans(sheet: &ParsedSheet) -> Vec<DailyPlan> {
    let col = |keyword: &str| -> Option<usize> {
        sheet
            .headers
            .iter()
            .position(|h| h.to_lowercase().contains(keyword))
    };
    let id_col = col("id");
    let date_col = col("tanggal");
    let officer_col = col("co");
    let columns = PlanColumns {
        target_survey: col("target survey"),
        actual_survey: col("realisasi survey"),
        target_disbursement: col("target pencairan"),
        actual_disbursement: col("realisasi pencairan"),
        target_collection_count: col("target penagihan"),
        actual_collection_count: col("realisasi penagihan"),
        target_collection_amount: col("target nominal"),
        actual_collection_amount: col("realisasi nominal"),
        target_admin: col("target admin"),
        actual_admin: col("realisasi admin"),
    };

    let mut plans = Vec::new();
    for (index, row) in sheet.rows.iter().enumerate() {
        let get = |i: Option<usize>| -> &str {
            i.and_then(|i| row.get(i)).map(|s| s.trim()).unwrap_or("")
        };
        let date = match parse_dmy(get(date_col)) {
            Some(d) => d,
            None => continue,
        };
        let officer = get(officer_col);
        if officer.is_empty() {
            continue;
        }
        let id = {
            let raw = get(id_col);
            if raw.is_empty() {
                format!("plan-{}", index + 1)
            } else {
                raw.to_string()
            }
        };
        plans.push(DailyPlan {
            id,
            officer: officer.to_string(),
            date,
            targets: PlanNumbers {
                survey_count: get(columns.target_survey).parse().unwrap_or(0),
                disbursement_amount: parse_currency_tolerant(get(columns.target_disbursement)),
                collection_count: get(columns.target_collection_count).parse().unwrap_or(0),
                collection_amount: parse_currency_tolerant(get(columns.target_collection_amount)),
                admin_count: get(columns.target_admin).parse().unwrap_or(0),
            },
            actuals: PlanNumbers {
                survey_count: get(columns.actual_survey).parse().unwrap_or(0),
                disbursement_amount: parse_currency_tolerant(get(columns.actual_disbursement)),
                collection_count: get(columns.actual_collection_count).parse().unwrap_or(0),
                collection_amount: parse_currency_tolerant(get(columns.actual_collection_amount)),
                admin_count: get(columns.actual_admin).parse().unwrap_or(0),
            },
        });
    }
    plans
}

struct PlanColumns {
    target_survey: Option<usize>,
    actual_survey: Option<usize>,
    target_disbursement: Option<usize>,
    actual_disbursement: Option<usize>,
    target_collection_count: Option<usize>,
    actual_collection_count: Option<usize>,
    target_collection_amount: Option<usize>,
    actual_collection_amount: Option<usize>,
    target_admin: Option<usize>,
    actual_admin: Option<usize>,
}
