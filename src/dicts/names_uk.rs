//! Ukrainian given names: variants, diminutives, transliterations, declensions.
//!
//! Declension order: genitive, dative, accusative, instrumental, locative.

use super::{Gender, NameRecord};

pub(super) static SURNAMES: &[&str] = &[
    "Порошенко",
    "Шевченко",
    "Бондаренко",
    "Коваленко",
    "Ткаченко",
    "Кравченко",
    "Петренко",
    "Сидоренко",
    "Іванов",
    "Мельник",
    "Шевчук",
    "Поліщук",
    "Ковальчук",
    "Савчук",
    "Левицький",
    "Хмельницький",
];

pub(super) static NAMES: &[NameRecord] = &[
    NameRecord {
        canonical: "Сергій",
        gender: Gender::Masc,
        variants: &["Сергей"],
        diminutives: &["Сергійко", "Сержик", "Сергійчик", "Сірко"],
        transliterations: &["Serhii", "Serhiy", "Sergiy"],
        declensions: &["Сергія", "Сергію", "Сергія", "Сергієм", "Сергієві"],
    },
    NameRecord {
        canonical: "Володимир",
        gender: Gender::Masc,
        variants: &["Владимир"],
        diminutives: &["Володя", "Вова", "Володька", "Вовчик", "Володимирко"],
        transliterations: &["Volodymyr", "Vladimir"],
        declensions: &[
            "Володимира",
            "Володимиру",
            "Володимира",
            "Володимиром",
            "Володимирові",
        ],
    },
    NameRecord {
        canonical: "Петро",
        gender: Gender::Masc,
        variants: &["Петр"],
        diminutives: &["Петя", "Петрик", "Петрусь", "Петруся"],
        transliterations: &["Petro", "Peter", "Petr"],
        declensions: &["Петра", "Петрові", "Петра", "Петром", "Петрові"],
    },
    NameRecord {
        canonical: "Іван",
        gender: Gender::Masc,
        variants: &["Иван"],
        diminutives: &["Івасик", "Івасько", "Іванько", "Ваня"],
        transliterations: &["Ivan", "Ioan"],
        declensions: &["Івана", "Іванові", "Івана", "Іваном", "Іванові"],
    },
    NameRecord {
        canonical: "Олексій",
        gender: Gender::Masc,
        variants: &["Алексей"],
        diminutives: &["Олесь", "Олесик", "Олежко", "Льоша"],
        transliterations: &["Oleksii", "Oleksiy", "Alexey"],
        declensions: &["Олексія", "Олексію", "Олексія", "Олексієм", "Олексієві"],
    },
    NameRecord {
        canonical: "Олександр",
        gender: Gender::Masc,
        variants: &["Александр"],
        diminutives: &["Сашко", "Сашка", "Олесь", "Лесь", "Саня", "Шурик"],
        transliterations: &["Oleksandr", "Alexander", "Olexandr"],
        declensions: &[
            "Олександра",
            "Олександру",
            "Олександра",
            "Олександром",
            "Олександрові",
        ],
    },
    NameRecord {
        canonical: "Дмитро",
        gender: Gender::Masc,
        variants: &["Дмитрий"],
        diminutives: &["Дмитрик", "Діма", "Митько"],
        transliterations: &["Dmytro", "Dmitry", "Dmitriy"],
        declensions: &["Дмитра", "Дмитрові", "Дмитра", "Дмитром", "Дмитрові"],
    },
    NameRecord {
        canonical: "Михайло",
        gender: Gender::Masc,
        variants: &["Михаил"],
        diminutives: &["Михайлик", "Михась", "Мишко"],
        transliterations: &["Mykhailo", "Mikhail", "Michael"],
        declensions: &["Михайла", "Михайлові", "Михайла", "Михайлом", "Михайлові"],
    },
    NameRecord {
        canonical: "Андрій",
        gender: Gender::Masc,
        variants: &["Андрей"],
        diminutives: &["Андрійко", "Андрійчик", "Андрусь"],
        transliterations: &["Andrii", "Andriy", "Andrey"],
        declensions: &["Андрія", "Андрію", "Андрія", "Андрієм", "Андрієві"],
    },
    NameRecord {
        canonical: "Василь",
        gender: Gender::Masc,
        variants: &["Василий"],
        diminutives: &["Василько", "Васильчик", "Вася"],
        transliterations: &["Vasyl", "Vasyliy", "Basil"],
        declensions: &["Василя", "Василю", "Василя", "Василем", "Василеві"],
    },
    NameRecord {
        canonical: "Микола",
        gender: Gender::Masc,
        variants: &["Николай"],
        diminutives: &["Миколка", "Коля", "Миколайчик"],
        transliterations: &["Mykola", "Nikolai", "Nicholas"],
        declensions: &["Миколи", "Миколі", "Миколу", "Миколою", "Миколі"],
    },
    NameRecord {
        canonical: "Юрій",
        gender: Gender::Masc,
        variants: &["Юрий", "Георгій"],
        diminutives: &["Юрко", "Юрась", "Юрчик"],
        transliterations: &["Yurii", "Yuriy", "Yuri"],
        declensions: &["Юрія", "Юрію", "Юрія", "Юрієм", "Юрієві"],
    },
    NameRecord {
        canonical: "Ігор",
        gender: Gender::Masc,
        variants: &["Игорь"],
        diminutives: &["Ігорко", "Гоша"],
        transliterations: &["Ihor", "Igor"],
        declensions: &["Ігоря", "Ігорю", "Ігоря", "Ігорем", "Ігореві"],
    },
    NameRecord {
        canonical: "Богдан",
        gender: Gender::Masc,
        variants: &["Богдан"],
        diminutives: &["Богданко", "Боді", "Данко"],
        transliterations: &["Bohdan", "Bogdan"],
        declensions: &["Богдана", "Богданові", "Богдана", "Богданом", "Богданові"],
    },
    NameRecord {
        canonical: "Тарас",
        gender: Gender::Masc,
        variants: &["Тарас"],
        diminutives: &["Тарасик", "Тараско"],
        transliterations: &["Taras"],
        declensions: &["Тараса", "Тарасові", "Тараса", "Тарасом", "Тарасові"],
    },
    NameRecord {
        canonical: "Павло",
        gender: Gender::Masc,
        variants: &["Павел"],
        diminutives: &["Павлик", "Павлусь", "Паша"],
        transliterations: &["Pavlo", "Pavel", "Paul"],
        declensions: &["Павла", "Павлові", "Павла", "Павлом", "Павлові"],
    },
    NameRecord {
        canonical: "Степан",
        gender: Gender::Masc,
        variants: &["Степан", "Стефан"],
        diminutives: &["Степанко", "Стьопа"],
        transliterations: &["Stepan", "Stefan"],
        declensions: &["Степана", "Степанові", "Степана", "Степаном", "Степанові"],
    },
    NameRecord {
        canonical: "Роман",
        gender: Gender::Masc,
        variants: &["Роман"],
        diminutives: &["Ромко", "Ромчик", "Рома"],
        transliterations: &["Roman"],
        declensions: &["Романа", "Романові", "Романа", "Романом", "Романові"],
    },
    NameRecord {
        canonical: "Віктор",
        gender: Gender::Masc,
        variants: &["Виктор"],
        diminutives: &["Вітя", "Вікторко"],
        transliterations: &["Viktor", "Victor"],
        declensions: &["Віктора", "Вікторові", "Віктора", "Віктором", "Вікторові"],
    },
    NameRecord {
        canonical: "Остап",
        gender: Gender::Masc,
        variants: &["Остап"],
        diminutives: &["Остапко", "Остапчик"],
        transliterations: &["Ostap"],
        declensions: &["Остапа", "Остапові", "Остапа", "Остапом", "Остапові"],
    },
    NameRecord {
        canonical: "Максим",
        gender: Gender::Masc,
        variants: &["Максим"],
        diminutives: &["Максимко", "Макс"],
        transliterations: &["Maksym", "Maxim"],
        declensions: &["Максима", "Максимові", "Максима", "Максимом", "Максимові"],
    },
    NameRecord {
        canonical: "Ярослав",
        gender: Gender::Masc,
        variants: &["Ярослав"],
        diminutives: &["Ярик", "Славко"],
        transliterations: &["Yaroslav", "Jaroslav"],
        declensions: &[
            "Ярослава",
            "Ярославові",
            "Ярослава",
            "Ярославом",
            "Ярославові",
        ],
    },
    NameRecord {
        canonical: "Анна",
        gender: Gender::Femn,
        variants: &["Ганна"],
        diminutives: &["Аня", "Аннуся", "Ганя", "Ганнуся", "Анечка"],
        transliterations: &["Anna", "Hanna"],
        declensions: &["Анни", "Анні", "Анну", "Анною", "Анні"],
    },
    NameRecord {
        canonical: "Марія",
        gender: Gender::Femn,
        variants: &["Мария"],
        diminutives: &["Марічка", "Маруся", "Марійка", "Маруня"],
        transliterations: &["Mariia", "Mariya", "Maria"],
        declensions: &["Марії", "Марії", "Марію", "Марією", "Марії"],
    },
    NameRecord {
        canonical: "Дарія",
        gender: Gender::Femn,
        variants: &["Дарья", "Одарка", "Дарʼя"],
        diminutives: &["Даша", "Дарочка", "Даринка", "Даруся"],
        transliterations: &["Dariia", "Daria", "Darya"],
        declensions: &["Дарії", "Дарії", "Дарію", "Дарією", "Дарії"],
    },
    NameRecord {
        canonical: "Олена",
        gender: Gender::Femn,
        variants: &["Елена", "Альона"],
        diminutives: &["Лена", "Леночка", "Оленка", "Оленочка"],
        transliterations: &["Olena", "Elena", "Aliona"],
        declensions: &["Олени", "Олені", "Олену", "Оленою", "Олені"],
    },
    NameRecord {
        canonical: "Наталія",
        gender: Gender::Femn,
        variants: &["Наталия", "Наталя"],
        diminutives: &["Наталочка", "Наталка", "Тала"],
        transliterations: &["Nataliia", "Natalia", "Nataliya"],
        declensions: &["Наталії", "Наталії", "Наталію", "Наталією", "Наталії"],
    },
    NameRecord {
        canonical: "Ірина",
        gender: Gender::Femn,
        variants: &["Ирина", "Ярина"],
        diminutives: &["Іринка", "Іруся", "Яринка", "Іра"],
        transliterations: &["Iryna", "Yaryna", "Irina"],
        declensions: &["Ірини", "Ірині", "Ірину", "Іриною", "Ірині"],
    },
    NameRecord {
        canonical: "Тетяна",
        gender: Gender::Femn,
        variants: &["Татьяна"],
        diminutives: &["Таня", "Танюся", "Тетянка"],
        transliterations: &["Tetiana", "Tetyana", "Tatyana"],
        declensions: &["Тетяни", "Тетяні", "Тетяну", "Тетяною", "Тетяні"],
    },
    NameRecord {
        canonical: "Оксана",
        gender: Gender::Femn,
        variants: &["Оксана", "Ксенія"],
        diminutives: &["Оксанка", "Ксюша"],
        transliterations: &["Oksana", "Oxana"],
        declensions: &["Оксани", "Оксані", "Оксану", "Оксаною", "Оксані"],
    },
    NameRecord {
        canonical: "Юлія",
        gender: Gender::Femn,
        variants: &["Юлия"],
        diminutives: &["Юля", "Юлечка", "Юляся"],
        transliterations: &["Yuliia", "Yuliya", "Julia"],
        declensions: &["Юлії", "Юлії", "Юлію", "Юлією", "Юлії"],
    },
    NameRecord {
        canonical: "Катерина",
        gender: Gender::Femn,
        variants: &["Екатерина"],
        diminutives: &["Катя", "Катруся", "Катеринка"],
        transliterations: &["Kateryna", "Ekaterina", "Catherine"],
        declensions: &["Катерини", "Катерині", "Катерину", "Катериною", "Катерині"],
    },
    NameRecord {
        canonical: "Світлана",
        gender: Gender::Femn,
        variants: &["Светлана"],
        diminutives: &["Світланка", "Свєта"],
        transliterations: &["Svitlana", "Svetlana"],
        declensions: &[
            "Світлани",
            "Світлані",
            "Світлану",
            "Світланою",
            "Світлані",
        ],
    },
    NameRecord {
        canonical: "Людмила",
        gender: Gender::Femn,
        variants: &["Людмила"],
        diminutives: &["Люда", "Людочка", "Міла"],
        transliterations: &["Liudmyla", "Lyudmila", "Ludmila"],
        declensions: &["Людмили", "Людмилі", "Людмилу", "Людмилою", "Людмилі"],
    },
    NameRecord {
        canonical: "Галина",
        gender: Gender::Femn,
        variants: &["Галина"],
        diminutives: &["Галя", "Галочка", "Галюся"],
        transliterations: &["Halyna", "Galina"],
        declensions: &["Галини", "Галині", "Галину", "Галиною", "Галині"],
    },
    NameRecord {
        canonical: "Надія",
        gender: Gender::Femn,
        variants: &["Надежда"],
        diminutives: &["Надійка", "Надя"],
        transliterations: &["Nadiia", "Nadiya", "Nadezhda"],
        declensions: &["Надії", "Надії", "Надію", "Надією", "Надії"],
    },
    NameRecord {
        canonical: "Соломія",
        gender: Gender::Femn,
        variants: &["Соломия"],
        diminutives: &["Соля", "Солямка"],
        transliterations: &["Solomiia", "Solomiya"],
        declensions: &["Соломії", "Соломії", "Соломію", "Соломією", "Соломії"],
    },
    NameRecord {
        canonical: "Христина",
        gender: Gender::Femn,
        variants: &["Кристина"],
        diminutives: &["Христя", "Христинка"],
        transliterations: &["Khrystyna", "Kristina", "Christina"],
        declensions: &[
            "Христини",
            "Христині",
            "Христину",
            "Христиною",
            "Христині",
        ],
    },
    // Source carries a second definition for Олена with a reduced payload;
    // table construction resolves duplicates last-wins.
    NameRecord {
        canonical: "Олена",
        gender: Gender::Femn,
        variants: &["Елена", "Альона", "Олёна"],
        diminutives: &["Лена", "Леночка", "Оленка"],
        transliterations: &["Olena", "Elena"],
        declensions: &["Олени", "Олені", "Олену", "Оленою", "Олені"],
    },
];
