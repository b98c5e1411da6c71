//! AI consultant chat: keyword-routed canned replies.
//!
//! Messages store *what* was said (a user's text, or a reply [`Topic`]), not
//! the rendered bot text, so the transcript follows language switches.

use rand::Rng;
use time::macros::format_description;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;
use crate::i18n::Language;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Price,
    Invest,
    Factor,
    Valuation,
    General,
}

impl Topic {
    /// First matching topic wins, checked in declaration order.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        let mentions = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));
        if mentions(&["ราคา", "price"]) {
            Topic::Price
        } else if mentions(&["ลงทุน", "invest"]) {
            Topic::Invest
        } else if mentions(&["ปัจจัย", "factor"]) {
            Topic::Factor
        } else if mentions(&["ประเมิน", "evaluate", "valuation"]) {
            Topic::Valuation
        } else {
            Topic::General
        }
    }

    pub fn reply(self, lang: Language) -> String {
        match self {
            Topic::Price => t!(lang, "consultant-reply-price"),
            Topic::Invest => t!(lang, "consultant-reply-invest"),
            Topic::Factor => t!(lang, "consultant-reply-factor"),
            Topic::Valuation => t!(lang, "consultant-reply-valuation"),
            Topic::General => t!(lang, "consultant-reply-default"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Trends,
    Invest,
    Factors,
    Valuation,
}

impl Suggestion {
    pub const ALL: [Suggestion; 4] = [
        Suggestion::Trends,
        Suggestion::Invest,
        Suggestion::Factors,
        Suggestion::Valuation,
    ];

    pub fn text(self, lang: Language) -> String {
        match self {
            Suggestion::Trends => t!(lang, "consultant-suggestion-trends"),
            Suggestion::Invest => t!(lang, "consultant-suggestion-invest"),
            Suggestion::Factors => t!(lang, "consultant-suggestion-factors"),
            Suggestion::Valuation => t!(lang, "consultant-suggestion-valuation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Welcome,
    User(String),
    Reply(Topic),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub body: MessageBody,
    pub sent_at: OffsetDateTime,
}

impl ChatMessage {
    fn new(body: MessageBody, sent_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            body,
            sent_at,
        }
    }

    pub fn is_from_user(&self) -> bool {
        matches!(self.body, MessageBody::User(_))
    }

    pub fn text(&self, lang: Language) -> String {
        match &self.body {
            MessageBody::Welcome => t!(lang, "consultant-welcome"),
            MessageBody::User(text) => text.clone(),
            MessageBody::Reply(topic) => topic.reply(lang),
        }
    }

    /// Local wall-clock time as `HH:MM`.
    pub fn clock(&self) -> String {
        self.sent_at
            .format(format_description!("[hour]:[minute]"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A transcript holding only the welcome message.
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            messages: vec![ChatMessage::new(MessageBody::Welcome, now)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Suggested questions are offered until the user says something.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() == 1
    }

    /// Appends the user's question. Blank input is ignored and yields `None`.
    pub fn push_user(&mut self, text: &str, now: OffsetDateTime) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages
            .push(ChatMessage::new(MessageBody::User(text.to_string()), now));
        Some(text.to_string())
    }

    pub fn push_reply(&mut self, topic: Topic, now: OffsetDateTime) {
        self.messages
            .push(ChatMessage::new(MessageBody::Reply(topic), now));
    }
}

/// Picks the reply topic for a question after a jittered "thinking" delay.
#[derive(Debug, Clone, Copy)]
pub struct Consultant {
    latency: Latency,
}

impl Consultant {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for Consultant {
    type Request = String;
    type Output = Topic;
    const NAME: &'static str = "consultant";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, question: &String, _rng: &mut R) -> Topic {
        Topic::classify(question)
    }
}
