//! English given names. Declensions are empty (English has no case system);
//! lookups rely on variants and diminutives only.

use super::{Gender, NameRecord};

pub(super) static SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson",
];

pub(super) static NAMES: &[NameRecord] = &[
    NameRecord {
        canonical: "John",
        gender: Gender::Masc,
        variants: &["Jon", "Johnny"],
        diminutives: &["Jack", "Johnny", "Jonny"],
        transliterations: &["Джон"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Peter",
        gender: Gender::Masc,
        variants: &["Pete"],
        diminutives: &["Pete", "Petey"],
        transliterations: &["Питер", "Пітер"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Michael",
        gender: Gender::Masc,
        variants: &["Mike"],
        diminutives: &["Mike", "Mikey", "Mick"],
        transliterations: &["Майкл"],
        declensions: &[],
    },
    NameRecord {
        canonical: "William",
        gender: Gender::Masc,
        variants: &["Will"],
        diminutives: &["Will", "Bill", "Billy", "Liam"],
        transliterations: &["Уильям", "Вільям"],
        declensions: &[],
    },
    NameRecord {
        canonical: "James",
        gender: Gender::Masc,
        variants: &["Jim"],
        diminutives: &["Jim", "Jimmy", "Jamie"],
        transliterations: &["Джеймс"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Robert",
        gender: Gender::Masc,
        variants: &["Rob"],
        diminutives: &["Rob", "Bob", "Bobby", "Robbie"],
        transliterations: &["Роберт"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Alexander",
        gender: Gender::Masc,
        variants: &["Alex"],
        diminutives: &["Alex", "Sasha", "Xander"],
        transliterations: &["Александр", "Олександр"],
        declensions: &[],
    },
    NameRecord {
        canonical: "David",
        gender: Gender::Masc,
        variants: &["Dave"],
        diminutives: &["Dave", "Davy"],
        transliterations: &["Дэвид", "Девід"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Richard",
        gender: Gender::Masc,
        variants: &["Rick"],
        diminutives: &["Rick", "Dick", "Richie"],
        transliterations: &["Ричард"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Thomas",
        gender: Gender::Masc,
        variants: &["Tom"],
        diminutives: &["Tom", "Tommy"],
        transliterations: &["Томас"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Charles",
        gender: Gender::Masc,
        variants: &["Charlie"],
        diminutives: &["Charlie", "Chuck"],
        transliterations: &["Чарльз"],
        declensions: &[],
    },
    NameRecord {
        canonical: "George",
        gender: Gender::Masc,
        variants: &["Georgie"],
        diminutives: &["Georgie"],
        transliterations: &["Джордж"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Anna",
        gender: Gender::Femn,
        variants: &["Anne", "Ann"],
        diminutives: &["Annie", "Nan"],
        transliterations: &["Анна"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Maria",
        gender: Gender::Femn,
        variants: &["Mary", "Marie"],
        diminutives: &["Molly", "Mia"],
        transliterations: &["Мария", "Марія"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Elizabeth",
        gender: Gender::Femn,
        variants: &["Elisabeth"],
        diminutives: &["Liz", "Beth", "Lizzy", "Eliza"],
        transliterations: &["Элизабет", "Елизавета"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Catherine",
        gender: Gender::Femn,
        variants: &["Katherine", "Kathryn"],
        diminutives: &["Kate", "Katie", "Cathy", "Kitty"],
        transliterations: &["Кэтрин", "Катерина"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Margaret",
        gender: Gender::Femn,
        variants: &["Margarita"],
        diminutives: &["Maggie", "Meg", "Peggy"],
        transliterations: &["Маргарет"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Jennifer",
        gender: Gender::Femn,
        variants: &["Jenifer"],
        diminutives: &["Jen", "Jenny"],
        transliterations: &["Дженнифер"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Susan",
        gender: Gender::Femn,
        variants: &["Suzanne"],
        diminutives: &["Sue", "Susie"],
        transliterations: &["Сьюзан"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Patricia",
        gender: Gender::Femn,
        variants: &["Patrizia"],
        diminutives: &["Pat", "Patty", "Trish"],
        transliterations: &["Патриция"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Helen",
        gender: Gender::Femn,
        variants: &["Helena", "Elena"],
        diminutives: &["Nell", "Lena"],
        transliterations: &["Хелен", "Елена"],
        declensions: &[],
    },
    NameRecord {
        canonical: "Daria",
        gender: Gender::Femn,
        variants: &["Darya", "Dariya"],
        diminutives: &["Dasha"],
        transliterations: &["Дарья", "Дарія"],
        declensions: &[],
    },
];
