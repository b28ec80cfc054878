use crate::model::booking::Booking;
use crate::model::stats::Kpis;
use crate::service::stats_service::{
    aggregate_by_date, bookings_by_source, busiest_day, busiest_time, compute_kpis,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The entire language-model dependency sits behind this seam. The
/// implementation (HTTP client, prompt plumbing, model choice) lives
/// with the external collaborator, not in this crate.
pub trait AnswerProvider {
    fn ask(&self, context: &str, question: &str) -> Result<String>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyContext {
    pub date: String, // YYYY-MM-DD
    pub day_of_week: String, // Mon, Tue...
    pub bookings: u32,
    pub covers: u32,
}

/// Precomputed aggregates serialized into the text block the provider
/// answers over. The model never sees raw rows, only these totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContextSummary {
    pub kpis: Kpis,
    pub daily: Vec<DailyContext>,
    pub source_mix: BTreeMap<String, u32>,
    pub busiest_day: Option<String>,
    pub busiest_time: Option<String>,
}

impl ContextSummary {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let daily = aggregate_by_date(bookings)
            .into_iter()
            .map(|(date, agg)| DailyContext {
                date: date.format("%Y-%m-%d").to_string(),
                day_of_week: date.format("%a").to_string(),
                bookings: agg.bookings,
                covers: agg.covers,
            })
            .collect();
        Self {
            kpis: compute_kpis(bookings),
            daily,
            source_mix: bookings_by_source(bookings),
            busiest_day: busiest_day(bookings).map(|(d, _)| d.format("%Y-%m-%d").to_string()),
            busiest_time: busiest_time(bookings).map(|(t, _)| t.format("%H:%M").to_string()),
        }
    }

    pub fn to_prompt_block(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(format!("Restaurant booking aggregates:\n{json}"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// One conversation over a fixed set of aggregates. The session is a
/// value the caller owns and passes into the handler explicitly; there
/// is no process-global chat state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    pub fn ask<P: AnswerProvider>(
        &mut self,
        provider: &P,
        context: &ContextSummary,
        question: &str,
    ) -> Result<String> {
        let block = context.to_prompt_block()?;
        let answer = provider.ask(&block, question)?;
        self.turns.push(ChatTurn {
            question: question.to_string(),
            answer: answer.clone(),
            asked_at: Utc::now(),
        });
        Ok(answer)
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::Source;
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct MockProvider {
        contexts_seen: RefCell<Vec<String>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                contexts_seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnswerProvider for MockProvider {
        fn ask(&self, context: &str, question: &str) -> Result<String> {
            self.contexts_seen.borrow_mut().push(context.to_string());
            Ok(format!("answer to: {}", question))
        }
    }

    struct FailingProvider;

    impl AnswerProvider for FailingProvider {
        fn ask(&self, _context: &str, _question: &str) -> Result<String> {
            Err(anyhow!("model unavailable"))
        }
    }

    fn fixture() -> Vec<Booking> {
        let date = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        vec![
            Booking::new(date, 4, Source::Reservation),
            Booking::new(date, 2, Source::WalkIn),
        ]
    }

    #[test]
    fn test_context_summary_from_bookings() {
        let summary = ContextSummary::from_bookings(&fixture());
        assert_eq!(summary.kpis.total_covers, 6);
        assert_eq!(summary.daily.len(), 1);
        assert_eq!(summary.daily[0].date, "2025-10-05");
        assert_eq!(summary.daily[0].day_of_week, "Sun");
        assert_eq!(summary.source_mix["Walk-in"], 1);
        assert_eq!(summary.busiest_day.as_deref(), Some("2025-10-05"));
        assert_eq!(summary.busiest_time, None);
    }

    #[test]
    fn test_prompt_block_carries_aggregates() {
        let block = ContextSummary::from_bookings(&fixture())
            .to_prompt_block()
            .unwrap();
        assert!(block.contains("total_covers"));
        assert!(block.contains("2025-10-05"));
    }

    #[test]
    fn test_session_records_turns() {
        let provider = MockProvider::new();
        let context = ContextSummary::from_bookings(&fixture());
        let mut session = ChatSession::new();

        let answer = session
            .ask(&provider, &context, "How busy was Sunday?")
            .unwrap();
        assert_eq!(answer, "answer to: How busy was Sunday?");
        session.ask(&provider, &context, "And overall?").unwrap();

        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[0].question, "How busy was Sunday?");
        assert_eq!(session.turns()[1].answer, "answer to: And overall?");
        // The provider got the serialized aggregates, not raw rows.
        assert!(provider.contexts_seen.borrow()[0].contains("total_bookings"));
    }

    #[test]
    fn test_provider_error_leaves_no_turn() {
        let context = ContextSummary::from_bookings(&fixture());
        let mut session = ChatSession::new();
        assert!(session.ask(&FailingProvider, &context, "anything").is_err());
        assert!(session.turns().is_empty());
    }
}
