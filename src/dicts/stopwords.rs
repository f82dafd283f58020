//! Per-language stop words for boundary trimming of extracted name spans.
//!
//! For Slavic input the store unions the `ru` and `uk` lists, so mixed
//! phrasing like "платеж від" trims cleanly from either side.

pub(super) static RU: &[&str] = &[
    "платеж",
    "платёж",
    "оплата",
    "перевод",
    "перечисление",
    "зачисление",
    "списание",
    "счет",
    "счёт",
    "договор",
    "от",
    "для",
    "на",
    "по",
    "за",
    "и",
    "в",
    "с",
    "имя",
    "получатель",
    "отправитель",
    "назначение",
];

pub(super) static UK: &[&str] = &[
    "платіж",
    "оплата",
    "переказ",
    "перерахування",
    "зарахування",
    "списання",
    "рахунок",
    "договір",
    "від",
    "для",
    "на",
    "по",
    "за",
    "і",
    "та",
    "в",
    "з",
    "ім'я",
    "одержувач",
    "відправник",
    "призначення",
];

pub(super) static EN: &[&str] = &[
    "payment",
    "transfer",
    "remittance",
    "invoice",
    "contract",
    "from",
    "for",
    "to",
    "of",
    "the",
    "and",
    "on",
    "behalf",
    "beneficiary",
    "recipient",
    "sender",
];
