//! Local replies from an ordered keyword table and templated fallbacks.

use log::debug;

use crate::types::Reply;

use super::random::{RandomSource, ThreadRandom};

/// Model tag attached to every locally generated reply.
pub const FALLBACK_MODEL: &str = "litvinovgpt-local";

const PLACEHOLDER: &str = "{message}";

const QUESTION_ECHO_CHARS: usize = 50;
const LONG_ECHO_CHARS: usize = 60;
const LONG_MESSAGE_TOKENS: usize = 10;

/// Keyword substring and the replies it may trigger.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub replies: &'static [&'static str],
}

/// Matched in order against the lowercased message; the first hit wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keyword: "привет",
        replies: &[
            "Привет! Я LitvinovGPT, твой личный ИИ-ассистент. Чем могу помочь?",
            "Привет-привет! Рад тебя видеть. О чём поговорим?",
            "Привет! Задавай любой вопрос, я постараюсь помочь.",
        ],
    },
    KeywordRule {
        keyword: "здравствуй",
        replies: &[
            "Здравствуйте! Я LitvinovGPT. Расскажите, что вас интересует.",
            "Здравствуйте! Готов помочь с вопросами, задачами и идеями.",
        ],
    },
    KeywordRule {
        keyword: "как дела",
        replies: &[
            "У меня всё отлично, спасибо! А у тебя как?",
            "Работаю на полную мощность и готов помогать. Как твои дела?",
        ],
    },
    KeywordRule {
        keyword: "кто ты",
        replies: &[
            "Я LitvinovGPT, умный и дружелюбный ИИ-ассистент. Помогаю с вопросами, кодом и идеями.",
            "Меня зовут LitvinovGPT. Я здесь, чтобы отвечать кратко, по делу и полезно.",
        ],
    },
    KeywordRule {
        keyword: "python",
        replies: &[
            "Python отличный выбор! Расскажи, над какой задачей работаешь, и я подскажу решение.",
            "Люблю Python за простоту и мощь. Что именно нужно написать или исправить?",
        ],
    },
    KeywordRule {
        keyword: "javascript",
        replies: &[
            "JavaScript умеет почти всё, от фронтенда до сервера. В чём нужна помощь?",
            "Давай разберёмся с JavaScript. Покажи код или опиши задачу.",
        ],
    },
    KeywordRule {
        keyword: "react",
        replies: &[
            "React отлично подходит для интерфейсов. Что собираешься сделать: компонент, хук или целое приложение?",
            "С React помогу! Опиши, какой компонент или состояние нужно реализовать.",
        ],
    },
    KeywordRule {
        keyword: "код",
        replies: &[
            "Пришли код, и я помогу найти ошибку или улучшить его.",
            "С кодом помогу! Уточни язык и что именно должно получиться.",
        ],
    },
    KeywordRule {
        keyword: "сайт",
        replies: &[
            "Создание сайта начинается с плана: страницы, дизайн, технологии. С чего хочешь начать?",
            "Могу помочь с сайтом: от структуры страниц до вёрстки и деплоя. Что уже есть?",
        ],
    },
    KeywordRule {
        keyword: "помоги",
        replies: &[
            "Конечно помогу! Опиши задачу подробнее.",
            "Я здесь, чтобы помочь. Расскажи, что нужно сделать.",
        ],
    },
    KeywordRule {
        keyword: "спасибо",
        replies: &[
            "Всегда пожалуйста! Обращайся, если появятся ещё вопросы.",
            "Рад был помочь! Если что, я рядом.",
        ],
    },
    KeywordRule {
        keyword: "до свидания",
        replies: &[
            "До свидания! Возвращайся, когда понадобится помощь.",
            "Всего доброго! Буду рад новым вопросам.",
        ],
    },
];

const QUESTION_TEMPLATES: &[&str] = &[
    "Хороший вопрос! Уточни, пожалуйста, что именно ты имеешь в виду: «{message}»?",
    "Интересно! Расскажи подробнее про «{message}», и я постараюсь помочь.",
    "Давай разберёмся. Вопрос «{message}» можно понять по-разному. Какой аспект тебе важнее?",
];

const LONG_MESSAGE_TEMPLATE: &str = "Спасибо за подробное сообщение! Я внимательно прочитал «{message}...» и готов помочь. С чего начнём?";

const GENERIC_TEMPLATES: &[&str] = &[
    "Понял тебя: «{message}». Расскажи подробнее, чем я могу помочь?",
    "«{message}» звучит интересно! Что бы ты хотел узнать?",
    "Записал: «{message}». Давай продолжим!",
    "Я сейчас работаю в упрощённом режиме, но постараюсь помочь. Уточни запрос, пожалуйста.",
];

/// Deterministic routing over the keyword table with random candidate choice.
pub struct KeywordStrategy {
    random: Box<dyn RandomSource>,
}

impl Default for KeywordStrategy {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}

impl KeywordStrategy {
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            random: Box::new(random),
        }
    }

    pub fn reply(&self, message: &str) -> Reply {
        Reply {
            reply: self.reply_text(message),
            model: FALLBACK_MODEL.to_string(),
        }
    }

    fn reply_text(&self, message: &str) -> String {
        let lowered = message.to_lowercase();

        if let Some(rule) = KEYWORD_RULES
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
        {
            debug!("Keyword match: '{}'", rule.keyword);
            return self.pick(rule.replies).to_string();
        }

        if message.contains('?') {
            debug!("No keyword match, answering with a clarifying question");
            let snippet = prefix_chars(message, QUESTION_ECHO_CHARS);
            return fill(self.pick(QUESTION_TEMPLATES), snippet);
        }

        if message.split_whitespace().count() > LONG_MESSAGE_TOKENS {
            debug!("No keyword match, answering a long message");
            return fill(LONG_MESSAGE_TEMPLATE, prefix_chars(message, LONG_ECHO_CHARS));
        }

        debug!("No keyword match, answering generically");
        fill(self.pick(GENERIC_TEMPLATES), message)
    }

    fn pick(&self, candidates: &[&'static str]) -> &'static str {
        self.random.choose(candidates).unwrap_or_default()
    }
}

fn prefix_chars(text: &str, count: usize) -> &str {
    text.char_indices()
        .nth(count)
        .map_or(text, |(idx, _)| &text[..idx])
}

fn fill(template: &str, message: &str) -> String {
    template.replace(PLACEHOLDER, message)
}
