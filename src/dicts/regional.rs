//! Regional name packs used for membership tests only.
//!
//! Pattern extraction consults these to decide whether a capitalized token
//! plausibly names a person even when it is absent from the full uk/ru/en
//! tables. Both Cyrillic renderings and Latin originals are listed; lookups
//! are case-insensitive.

pub(super) static ASIAN: &[&str] = &[
    // Chinese
    "Вей", "Wei", "Лі", "Li", "Lee", "Чжан", "Zhang", "Chang", "Ван", "Wang", "Wong",
    "Лю", "Liu", "Lau", "Чень", "Chen", "Ян", "Yang", "Хуан", "Huang", "Чжао", "Zhao",
    "Сінь", "Xin", "Мін", "Ming",
    // Japanese
    "Хіроші", "Hiroshi", "Такаші", "Takashi", "Кендзі", "Kenji", "Юкі", "Yuki",
    "Харука", "Haruka", "Сакура", "Sakura", "Акіра", "Akira",
    // Korean
    "Мінджун", "Minjun", "Джіху", "Jihoo", "Соён", "Seoyeon", "Хаюн", "Hayoon",
    // Vietnamese
    "Нгуєн", "Nguyen", "Мінь", "Minh",
];

pub(super) static ARABIC: &[&str] = &[
    "Мухаммад", "Muhammad", "Mohammed", "Mohamed", "Ахмад", "Ahmad", "Ahmed",
    "Алі", "Ali", "Омар", "Omar", "Umar", "Хасан", "Hassan", "Hasan",
    "Хусейн", "Hussein", "Husayn", "Ібрагім", "Ibrahim", "Юсуф", "Yusuf", "Youssef",
    "Халід", "Khalid", "Khaled", "Абдулла", "Abdullah", "Abdulla",
    "Фатіма", "Fatima", "Аїша", "Aisha", "Ayesha", "Лейла", "Layla", "Leila",
    "Маріам", "Mariam", "Maryam", "Заїнаб", "Zainab",
];

pub(super) static INDIAN: &[&str] = &[
    "Радж", "Raj", "Амір", "Amir", "Арджун", "Arjun", "Вікрам", "Vikram",
    "Санджай", "Sanjay", "Рахул", "Rahul", "Крішна", "Krishna",
    "Прія", "Priya", "Аніта", "Anita", "Діпіка", "Deepika", "Лакшмі", "Lakshmi",
];

pub(super) static EUROPEAN: &[&str] = &[
    // French
    "Жан", "Jean", "П'єр", "Pierre", "Марі", "Marie", "Софі", "Sophie",
    "Антуан", "Antoine", "Батіст", "Baptiste", "Клод", "Claude",
    // Spanish / Italian
    "Хосе", "Jose", "Хуан", "Juan", "Карлос", "Carlos", "Луїс", "Luis",
    "Кармен", "Carmen", "Мігель", "Miguel", "Джованні", "Giovanni",
    "Франческа", "Francesca", "Марко", "Marco",
    // German / Polish
    "Ганс", "Hans", "Клаус", "Klaus", "Гельмут", "Helmut",
    "Анджей", "Andrzej", "Кшиштоф", "Krzysztof", "Войцех", "Wojciech",
];

pub(super) static SCANDINAVIAN: &[&str] = &[
    "Ларс", "Lars", "Ерік", "Erik", "Eric", "Свен", "Sven", "Олаф", "Olaf", "Olav",
    "Бйорн", "Bjorn", "Bjørn", "Інгрід", "Ingrid", "Астрід", "Astrid",
    "Фрея", "Freya", "Сігрід", "Sigrid", "Гуннар", "Gunnar",
];
