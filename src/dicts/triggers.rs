//! Payment and company trigger vocabularies, initials preferences, and the
//! Ukrainian surname-suffix heuristic.

/// Payment-context trigger words per language (regex alternation bodies).
pub(super) static PAYMENT_CONTEXT_RU: &[&str] = &[
    "платеж",
    "платёж",
    "оплата",
    "перевод",
    "перечисление",
    "зачисление",
];
pub(super) static PAYMENT_CONTEXT_UK: &[&str] =
    &["платіж", "платиж", "оплата", "переказ", "перерахування"];
pub(super) static PAYMENT_CONTEXT_EN: &[&str] = &[
    "payment",
    "transfer",
    "remittance",
    "funds",
    "money",
    "credit",
    "debit",
    "incoming",
];

/// Prepositions introducing the counterparty after a trigger.
pub(super) static PREPS_RU: &[&str] = &["от", "для", "на"];
pub(super) static PREPS_UK: &[&str] = &["від", "для", "на"];
pub(super) static PREPS_EN: &[&str] = &["from", "for", "to"];

/// Legal-entity abbreviations. A bare marker is never a company name.
pub(super) static LEGAL_ENTITIES_RU: &[&str] = &[
    "ООО", "ЗАО", "ПАО", "ОАО", "АО", "ИП", "НКО", "ГУП", "МУП",
];
pub(super) static LEGAL_ENTITIES_UK: &[&str] =
    &["ТОВ", "ПП", "АТ", "ПрАТ", "ПАТ", "ФОП", "КП", "ДП"];
pub(super) static LEGAL_ENTITIES_EN: &[&str] = &[
    "LLC", "Ltd", "Inc", "Corp", "GmbH", "AG", "SA", "PLC", "LLP", "Co",
];

/// Long legal phrases stripped from company-span boundaries.
pub(super) static LONG_PHRASES_RU: &[&str] = &[
    "общество с ограниченной ответственностью",
    "закрытое акционерное общество",
    "публичное акционерное общество",
    "открытое акционерное общество",
    "индивидуальный предприниматель",
];
pub(super) static LONG_PHRASES_UK: &[&str] = &[
    "товариство з обмеженою відповідальністю",
    "приватне акціонерне товариство",
    "публічне акціонерне товариство",
    "фізична особа-підприємець",
    "приватне підприємство",
];
pub(super) static LONG_PHRASES_EN: &[&str] = &[
    "limited liability company",
    "joint stock company",
    "public limited company",
];

/// Preferred expansions per initial letter, most likely first.
/// `П. Порошенко` expands to the head of the `П` list.
pub(super) static INITIALS_UK: &[(char, &[&str])] = &[
    ('П', &["Петро", "Павло"]),
    ('С', &["Сергій", "Степан", "Світлана"]),
    ('В', &["Володимир", "Василь", "Віктор"]),
    ('О', &["Олександр", "Олексій", "Олена", "Оксана"]),
    ('І', &["Іван", "Ігор", "Ірина"]),
    ('М', &["Михайло", "Микола", "Марія", "Максим"]),
    ('А', &["Андрій", "Анна"]),
    ('Д', &["Дмитро", "Дарія"]),
    ('Ю', &["Юрій", "Юлія"]),
    ('Т', &["Тарас", "Тетяна"]),
    ('Б', &["Богдан"]),
    ('Р', &["Роман"]),
    ('Н', &["Наталія", "Надія"]),
    ('К', &["Катерина"]),
    ('Г', &["Галина"]),
    ('Я', &["Ярослав"]),
    ('Л', &["Людмила"]),
    ('Х', &["Христина"]),
    ('Є', &["Євген"]),
];

pub(super) static INITIALS_RU: &[(char, &[&str])] = &[
    ('П', &["Пётр", "Павел"]),
    ('С', &["Сергей", "Светлана"]),
    ('В', &["Владимир", "Виктор"]),
    ('А', &["Александр", "Алексей", "Андрей", "Анна"]),
    ('И', &["Иван", "Игорь", "Ирина"]),
    ('М', &["Михаил", "Мария", "Максим"]),
    ('Д', &["Дмитрий", "Дарья"]),
    ('Н', &["Николай", "Наталья", "Надежда"]),
    ('Ю', &["Юрий", "Юлия"]),
    ('Т', &["Татьяна"]),
    ('Е', &["Евгений", "Елена", "Екатерина"]),
    ('Р', &["Роман"]),
    ('К', &["Константин"]),
    ('О', &["Ольга"]),
    ('Л', &["Людмила"]),
];

/// Ukrainian surname suffixes, nominative and oblique forms. A surname ending
/// in one of these forces the name language to `uk` regardless of detection.
pub(super) static UK_SURNAME_SUFFIXES: &[&str] = &[
    "енко", "енка", // -enko nominative / genitive
    "чук", "чука", // -chuk
    "юк", "юка", // -yuk
    "ук", "ука", // -uk
    "ський", "ського", "цький", "цького", "зький", "зького", "ский", "ского",
    "ко", "ка", // -ko, -ka (oblique)
];

/// Tokens the morphological normalizer must never lemmatize (trademark-like
/// words and particles that case-fold into unrelated lemmas).
pub(super) static LEMMA_BLACKLIST: &[&str] = &[
    "ООО", "ТОВ", "ФОП", "ИП", "АТ", "ПАО", "банк", "swift", "iban",
];
