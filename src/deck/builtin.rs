//! The compiled-in deck: radiation safety norms, ten slides.

use crate::icons::Icon;

use super::Slide;

const SLIDES: [(&str, &str, Icon); 10] = [
    (
        "Область применения",
        "Нормы радиационной безопасности применяются для обеспечения защиты человека и окружающей среды от вредного воздействия ионизирующего излучения.",
        Icon::Globe,
    ),
    (
        "Общие положения",
        "Основные принципы радиационной безопасности: обоснование, оптимизация и нормирование. Любая деятельность должна быть оправдана получаемой пользой.",
        Icon::FileText,
    ),
    (
        "Ограничение техногенного облучения",
        "Установление пределов доз облучения для персонала и населения при работе с источниками ионизирующего излучения в контролируемых условиях.",
        Icon::ShieldAlert,
    ),
    (
        "Нормальные условия эксплуатации",
        "Регламентируются дозовые пределы для персонала категории А (20 мЗв/год) и категории Б (5 мЗв/год) при штатной работе с источниками излучения.",
        Icon::Settings,
    ),
    (
        "Планируемое повышенное облучение",
        "В особых случаях допускается превышение установленных пределов доз при выполнении работ по ликвидации аварий и предотвращению катастроф.",
        Icon::TrendingUp,
    ),
    (
        "Защита от природного облучения",
        "Меры по ограничению облучения работников природными источниками радиации: радон в помещениях, космическое излучение, природные радионуклиды.",
        Icon::Mountain,
    ),
    (
        "Ограничение облучения населения",
        "Установлен предел эффективной дозы для населения - 1 мЗв в год. Учитывается облучение от всех источников, кроме медицинского и природного.",
        Icon::Users,
    ),
    (
        "Облучение в условиях аварии",
        "При радиационных авариях применяются уровни вмешательства и защитные меры: укрытие, эвакуация, йодная профилактика, ограничения на продукты.",
        Icon::AlertTriangle,
    ),
    (
        "Контроль за выполнением Норм",
        "Осуществляется радиационный контроль: индивидуальный дозиметрический контроль персонала, контроль рабочих мест, контроль радиоактивных выбросов.",
        Icon::Search,
    ),
    (
        "Допустимые уровни воздействия",
        "Установлены нормативы: предельно допустимые дозы, допустимые уровни содержания радионуклидов, контрольные уровни облучения.",
        Icon::BarChart3,
    ),
];

pub(super) fn slides() -> Vec<Slide> {
    SLIDES
        .iter()
        .zip(1u32..)
        .map(|(&(title, content, icon), id)| Slide {
            id,
            title: title.to_string(),
            content: content.to_string(),
            icon,
        })
        .collect()
}
