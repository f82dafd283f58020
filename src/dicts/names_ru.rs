//! Russian given names: variants, diminutives, transliterations, declensions.
//!
//! Declension order: genitive, dative, accusative, instrumental, prepositional.

use super::{Gender, NameRecord};

pub(super) static SURNAMES: &[&str] = &[
    "Иванов",
    "Петров",
    "Сидоров",
    "Смирнов",
    "Кузнецов",
    "Попов",
    "Соколов",
    "Лебедев",
    "Козлов",
    "Новиков",
    "Морозов",
    "Волков",
    "Павлов",
    "Фёдоров",
    "Порошенко",
];

pub(super) static NAMES: &[NameRecord] = &[
    NameRecord {
        canonical: "Александр",
        gender: Gender::Masc,
        variants: &["Олександр"],
        diminutives: &["Саша", "Саня", "Шура", "Шурик", "Санёк"],
        transliterations: &["Alexander", "Aleksandr", "Alexandr"],
        declensions: &[
            "Александра",
            "Александру",
            "Александра",
            "Александром",
            "Александре",
        ],
    },
    NameRecord {
        canonical: "Сергей",
        gender: Gender::Masc,
        variants: &["Сергій"],
        diminutives: &["Серёжа", "Серж", "Серый"],
        transliterations: &["Sergey", "Sergei", "Serge"],
        declensions: &["Сергея", "Сергею", "Сергея", "Сергеем", "Сергее"],
    },
    NameRecord {
        canonical: "Владимир",
        gender: Gender::Masc,
        variants: &["Володимир"],
        diminutives: &["Володя", "Вова", "Вовчик", "Вован"],
        transliterations: &["Vladimir", "Volodymyr"],
        declensions: &[
            "Владимира",
            "Владимиру",
            "Владимира",
            "Владимиром",
            "Владимире",
        ],
    },
    NameRecord {
        canonical: "Пётр",
        gender: Gender::Masc,
        variants: &["Петр", "Петро"],
        diminutives: &["Петя", "Петенька", "Петруша"],
        transliterations: &["Petr", "Pyotr", "Peter"],
        declensions: &["Петра", "Петру", "Петра", "Петром", "Петре"],
    },
    NameRecord {
        canonical: "Иван",
        gender: Gender::Masc,
        variants: &["Іван"],
        diminutives: &["Ваня", "Ванюша", "Иванушка"],
        transliterations: &["Ivan"],
        declensions: &["Ивана", "Ивану", "Ивана", "Иваном", "Иване"],
    },
    NameRecord {
        canonical: "Алексей",
        gender: Gender::Masc,
        variants: &["Олексій"],
        diminutives: &["Лёша", "Алёша", "Лёха"],
        transliterations: &["Alexey", "Aleksey", "Alexei"],
        declensions: &["Алексея", "Алексею", "Алексея", "Алексеем", "Алексее"],
    },
    NameRecord {
        canonical: "Дмитрий",
        gender: Gender::Masc,
        variants: &["Дмитро"],
        diminutives: &["Дима", "Димка", "Митя"],
        transliterations: &["Dmitry", "Dmitriy", "Dmitri"],
        declensions: &["Дмитрия", "Дмитрию", "Дмитрия", "Дмитрием", "Дмитрии"],
    },
    NameRecord {
        canonical: "Михаил",
        gender: Gender::Masc,
        variants: &["Михайло"],
        diminutives: &["Миша", "Мишаня", "Михась"],
        transliterations: &["Mikhail", "Michael", "Michail"],
        declensions: &["Михаила", "Михаилу", "Михаила", "Михаилом", "Михаиле"],
    },
    NameRecord {
        canonical: "Андрей",
        gender: Gender::Masc,
        variants: &["Андрій"],
        diminutives: &["Андрюша", "Дюша", "Андрейка"],
        transliterations: &["Andrey", "Andrei", "Andrew"],
        declensions: &["Андрея", "Андрею", "Андрея", "Андреем", "Андрее"],
    },
    NameRecord {
        canonical: "Николай",
        gender: Gender::Masc,
        variants: &["Микола"],
        diminutives: &["Коля", "Колян", "Николаша"],
        transliterations: &["Nikolay", "Nikolai", "Nicholas"],
        declensions: &["Николая", "Николаю", "Николая", "Николаем", "Николае"],
    },
    NameRecord {
        canonical: "Юрий",
        gender: Gender::Masc,
        variants: &["Юрій"],
        diminutives: &["Юра", "Юрик", "Юраша"],
        transliterations: &["Yury", "Yuriy", "Yuri"],
        declensions: &["Юрия", "Юрию", "Юрия", "Юрием", "Юрии"],
    },
    NameRecord {
        canonical: "Игорь",
        gender: Gender::Masc,
        variants: &["Ігор"],
        diminutives: &["Игорёк", "Гоша"],
        transliterations: &["Igor"],
        declensions: &["Игоря", "Игорю", "Игоря", "Игорем", "Игоре"],
    },
    NameRecord {
        canonical: "Павел",
        gender: Gender::Masc,
        variants: &["Павло"],
        diminutives: &["Паша", "Павлик", "Пашка"],
        transliterations: &["Pavel", "Paul"],
        declensions: &["Павла", "Павлу", "Павла", "Павлом", "Павле"],
    },
    NameRecord {
        canonical: "Виктор",
        gender: Gender::Masc,
        variants: &["Віктор"],
        diminutives: &["Витя", "Витёк"],
        transliterations: &["Viktor", "Victor"],
        declensions: &["Виктора", "Виктору", "Виктора", "Виктором", "Викторе"],
    },
    NameRecord {
        canonical: "Роман",
        gender: Gender::Masc,
        variants: &["Роман"],
        diminutives: &["Рома", "Ромка"],
        transliterations: &["Roman"],
        declensions: &["Романа", "Роману", "Романа", "Романом", "Романе"],
    },
    NameRecord {
        canonical: "Максим",
        gender: Gender::Masc,
        variants: &["Максим"],
        diminutives: &["Макс", "Максимка"],
        transliterations: &["Maxim", "Maksim"],
        declensions: &["Максима", "Максиму", "Максима", "Максимом", "Максиме"],
    },
    NameRecord {
        canonical: "Евгений",
        gender: Gender::Masc,
        variants: &["Євген"],
        diminutives: &["Женя", "Жека"],
        transliterations: &["Evgeny", "Yevgeny", "Eugene"],
        declensions: &["Евгения", "Евгению", "Евгения", "Евгением", "Евгении"],
    },
    NameRecord {
        canonical: "Константин",
        gender: Gender::Masc,
        variants: &["Костянтин"],
        diminutives: &["Костя", "Костик"],
        transliterations: &["Konstantin", "Constantine"],
        declensions: &[
            "Константина",
            "Константину",
            "Константина",
            "Константином",
            "Константине",
        ],
    },
    NameRecord {
        canonical: "Анна",
        gender: Gender::Femn,
        variants: &["Ганна"],
        diminutives: &["Аня", "Анюта", "Анечка", "Нюра"],
        transliterations: &["Anna", "Ann"],
        declensions: &["Анны", "Анне", "Анну", "Анной", "Анне"],
    },
    NameRecord {
        canonical: "Мария",
        gender: Gender::Femn,
        variants: &["Марія"],
        diminutives: &["Маша", "Маруся", "Машенька"],
        transliterations: &["Maria", "Mariya"],
        declensions: &["Марии", "Марии", "Марию", "Марией", "Марии"],
    },
    NameRecord {
        canonical: "Дарья",
        gender: Gender::Femn,
        variants: &["Дарія", "Дария"],
        diminutives: &["Даша", "Дашенька", "Дашуля"],
        transliterations: &["Darya", "Daria", "Dasha"],
        declensions: &["Дарьи", "Дарье", "Дарью", "Дарьей", "Дарье"],
    },
    NameRecord {
        canonical: "Елена",
        gender: Gender::Femn,
        variants: &["Олена", "Алёна"],
        diminutives: &["Лена", "Леночка", "Ленуся"],
        transliterations: &["Elena", "Yelena", "Helen"],
        declensions: &["Елены", "Елене", "Елену", "Еленой", "Елене"],
    },
    NameRecord {
        canonical: "Наталья",
        gender: Gender::Femn,
        variants: &["Наталія", "Наталия"],
        diminutives: &["Наташа", "Натуся", "Ната"],
        transliterations: &["Natalya", "Natalia", "Natasha"],
        declensions: &["Натальи", "Наталье", "Наталью", "Натальей", "Наталье"],
    },
    NameRecord {
        canonical: "Ирина",
        gender: Gender::Femn,
        variants: &["Ірина"],
        diminutives: &["Ира", "Ирочка", "Иришка"],
        transliterations: &["Irina", "Irene"],
        declensions: &["Ирины", "Ирине", "Ирину", "Ириной", "Ирине"],
    },
    NameRecord {
        canonical: "Татьяна",
        gender: Gender::Femn,
        variants: &["Тетяна"],
        diminutives: &["Таня", "Танюша", "Татьянка"],
        transliterations: &["Tatyana", "Tatiana"],
        declensions: &["Татьяны", "Татьяне", "Татьяну", "Татьяной", "Татьяне"],
    },
    NameRecord {
        canonical: "Ольга",
        gender: Gender::Femn,
        variants: &["Ольга"],
        diminutives: &["Оля", "Олечка", "Ольгуша"],
        transliterations: &["Olga", "Olha"],
        declensions: &["Ольги", "Ольге", "Ольгу", "Ольгой", "Ольге"],
    },
    NameRecord {
        canonical: "Екатерина",
        gender: Gender::Femn,
        variants: &["Катерина"],
        diminutives: &["Катя", "Катюша", "Катенька"],
        transliterations: &["Ekaterina", "Yekaterina", "Catherine"],
        declensions: &[
            "Екатерины",
            "Екатерине",
            "Екатерину",
            "Екатериной",
            "Екатерине",
        ],
    },
    NameRecord {
        canonical: "Светлана",
        gender: Gender::Femn,
        variants: &["Світлана"],
        diminutives: &["Света", "Светочка"],
        transliterations: &["Svetlana", "Svitlana"],
        declensions: &[
            "Светланы",
            "Светлане",
            "Светлану",
            "Светланой",
            "Светлане",
        ],
    },
    NameRecord {
        canonical: "Людмила",
        gender: Gender::Femn,
        variants: &["Людмила"],
        diminutives: &["Люда", "Люся", "Мила"],
        transliterations: &["Lyudmila", "Ludmila"],
        declensions: &["Людмилы", "Людмиле", "Людмилу", "Людмилой", "Людмиле"],
    },
    NameRecord {
        canonical: "Надежда",
        gender: Gender::Femn,
        variants: &["Надія"],
        diminutives: &["Надя", "Надюша"],
        transliterations: &["Nadezhda", "Nadia"],
        declensions: &["Надежды", "Надежде", "Надежду", "Надеждой", "Надежде"],
    },
    NameRecord {
        canonical: "Юлия",
        gender: Gender::Femn,
        variants: &["Юлія"],
        diminutives: &["Юля", "Юленька"],
        transliterations: &["Yulia", "Julia", "Yuliya"],
        declensions: &["Юлии", "Юлии", "Юлию", "Юлией", "Юлии"],
    },
    NameRecord {
        canonical: "Анастасия",
        gender: Gender::Femn,
        variants: &["Анастасія"],
        diminutives: &["Настя", "Настенька", "Ася"],
        transliterations: &["Anastasia", "Anastasiya"],
        declensions: &[
            "Анастасии",
            "Анастасии",
            "Анастасию",
            "Анастасией",
            "Анастасии",
        ],
    },
];
