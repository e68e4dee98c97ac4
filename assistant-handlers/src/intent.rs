//! Image intent detection from trigger phrases.

/// What a trigger asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// "生成N张图片": the rest of the message is a new description.
    Generate,
    /// "再来N张": reuse the previously stored description.
    More,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTrigger {
    pub phrase: &'static str,
    pub kind: TriggerKind,
    pub count: u8,
}

const fn trigger(phrase: &'static str, kind: TriggerKind, count: u8) -> ImageTrigger {
    ImageTrigger { phrase, kind, count }
}

/// Trigger phrases in match order. The first committed match wins.
pub const IMAGE_TRIGGERS: &[ImageTrigger] = &[
    trigger("生成图片", TriggerKind::Generate, 1),
    trigger("生成一张图片", TriggerKind::Generate, 1),
    trigger("生成1张图片", TriggerKind::Generate, 1),
    trigger("生成两张图片", TriggerKind::Generate, 2),
    trigger("生成2张图片", TriggerKind::Generate, 2),
    trigger("生成三张图片", TriggerKind::Generate, 3),
    trigger("生成3张图片", TriggerKind::Generate, 3),
    trigger("再来一张", TriggerKind::More, 1),
    trigger("再来1张", TriggerKind::More, 1),
    trigger("再来两张", TriggerKind::More, 2),
    trigger("再来2张", TriggerKind::More, 2),
    trigger("再来三张", TriggerKind::More, 3),
    trigger("再来3张", TriggerKind::More, 3),
];

/// Classification of one inbound text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PlainText,
    /// New image request. `description` may be empty; the caller decides what to do with it.
    ImageNew { description: String, count: u8 },
    ImageContinue { description: String, count: u8 },
    /// A "more" trigger matched but nothing was remembered to repeat.
    ImageSkip,
}

/// Classifies `text` given the user's stored prompt (the remembered image description).
///
/// A "generate" trigger strips itself from the front of the message to obtain the description;
/// if the trigger sits elsewhere, the whole message is the description. A "more" trigger without
/// a stored prompt does not commit and scanning continues; if nothing else commits the result is
/// [`Intent::ImageSkip`].
pub fn classify(text: &str, prior_prompt: &str) -> Intent {
    let text = text.trim();
    let mut skipped = false;

    for t in IMAGE_TRIGGERS {
        if !text.contains(t.phrase) {
            continue;
        }
        match t.kind {
            TriggerKind::Generate => {
                let description = text.strip_prefix(t.phrase).unwrap_or(text).trim();
                return Intent::ImageNew {
                    description: description.to_string(),
                    count: t.count,
                };
            }
            TriggerKind::More => {
                if prior_prompt.is_empty() {
                    skipped = true;
                    continue;
                }
                return Intent::ImageContinue {
                    description: prior_prompt.to_string(),
                    count: t.count,
                };
            }
        }
    }

    if skipped {
        Intent::ImageSkip
    } else {
        Intent::PlainText
    }
}
