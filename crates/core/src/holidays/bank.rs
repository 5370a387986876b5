use chrono::{Duration, NaiveDate};

use super::types::Holiday;
use super::zones::BankZone;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BankHoliday {
    NewYear,
    GoodFriday,
    EasterMonday,
    Labour,
    Victory,
    Ascension,
    WhitMonday,
    Bastille,
    Assumption,
    AllSaints,
    Armistice,
    Christmas,
    StStephen,
    Abolition,
}

impl BankHoliday {
    fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (BankHoliday::NewYear, Locale::En) => "New Year's Day",
            (BankHoliday::NewYear, Locale::Fr) => "Jour de l'an",
            (BankHoliday::GoodFriday, Locale::En) => "Good Friday",
            (BankHoliday::GoodFriday, Locale::Fr) => "Vendredi saint",
            (BankHoliday::EasterMonday, Locale::En) => "Easter Monday",
            (BankHoliday::EasterMonday, Locale::Fr) => "Lundi de Pâques",
            (BankHoliday::Labour, Locale::En) => "Labour Day",
            (BankHoliday::Labour, Locale::Fr) => "Fête du Travail",
            (BankHoliday::Victory, Locale::En) => "Victory in Europe Day",
            (BankHoliday::Victory, Locale::Fr) => "Victoire des alliés",
            (BankHoliday::Ascension, Locale::En) => "Ascension Day",
            (BankHoliday::Ascension, Locale::Fr) => "Ascension",
            (BankHoliday::WhitMonday, Locale::En) => "Whit Monday",
            (BankHoliday::WhitMonday, Locale::Fr) => "Lundi de Pentecôte",
            (BankHoliday::Bastille, Locale::En) => "Bastille Day",
            (BankHoliday::Bastille, Locale::Fr) => "Fête nationale",
            (BankHoliday::Assumption, Locale::En) => "Assumption Day",
            (BankHoliday::Assumption, Locale::Fr) => "Assomption",
            (BankHoliday::AllSaints, Locale::En) => "All Saints' Day",
            (BankHoliday::AllSaints, Locale::Fr) => "Toussaint",
            (BankHoliday::Armistice, Locale::En) => "Armistice Day",
            (BankHoliday::Armistice, Locale::Fr) => "Armistice",
            (BankHoliday::Christmas, Locale::En) => "Christmas Day",
            (BankHoliday::Christmas, Locale::Fr) => "Noël",
            (BankHoliday::StStephen, Locale::En) => "St Stephen's Day",
            (BankHoliday::StStephen, Locale::Fr) => "Deuxième jour de Noël",
            (BankHoliday::Abolition, Locale::En) => "Abolition of Slavery Day",
            (BankHoliday::Abolition, Locale::Fr) => "Abolition de l'esclavage",
        }
    }
}

/// Easter Sunday of the Gregorian calendar (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Abolition of slavery commemoration, as (month, day, first year observed).
fn abolition_day(zone: BankZone) -> Option<(u32, u32, i32)> {
    match zone {
        BankZone::Guadeloupe => Some((5, 27, 1983)),
        BankZone::Guyane => Some((6, 10, 1983)),
        BankZone::Martinique => Some((5, 22, 1983)),
        BankZone::Mayotte => Some((4, 27, 1983)),
        BankZone::LaReunion => Some((12, 20, 1983)),
        BankZone::SaintBarthelemy => Some((10, 9, 1983)),
        BankZone::SaintMartin => Some((5, 28, 2018)),
        BankZone::Metropole | BankZone::AlsaceMoselle => None,
    }
}

fn observes_good_friday(zone: BankZone) -> bool {
    matches!(
        zone,
        BankZone::AlsaceMoselle | BankZone::Guadeloupe | BankZone::Guyane | BankZone::Martinique
    )
}

/// Bank holidays of `zone` for `year`, sorted by date.
pub fn bank_holidays(year: i32, zone: BankZone, locale: Locale) -> Vec<Holiday> {
    let fixed = |month: u32, day: u32| NaiveDate::from_ymd_opt(year, month, day);
    let mut days: Vec<(Option<NaiveDate>, BankHoliday)> = vec![
        (fixed(1, 1), BankHoliday::NewYear),
        (fixed(5, 1), BankHoliday::Labour),
        (fixed(7, 14), BankHoliday::Bastille),
        (fixed(8, 15), BankHoliday::Assumption),
        (fixed(11, 1), BankHoliday::AllSaints),
        (fixed(11, 11), BankHoliday::Armistice),
        (fixed(12, 25), BankHoliday::Christmas),
    ];

    if year >= 1953 {
        days.push((fixed(5, 8), BankHoliday::Victory));
    }

    if let Some(easter) = easter_sunday(year) {
        days.push((Some(easter + Duration::days(1)), BankHoliday::EasterMonday));
        days.push((Some(easter + Duration::days(39)), BankHoliday::Ascension));
        days.push((Some(easter + Duration::days(50)), BankHoliday::WhitMonday));
        if observes_good_friday(zone) {
            days.push((Some(easter - Duration::days(2)), BankHoliday::GoodFriday));
        }
    }

    if zone == BankZone::AlsaceMoselle {
        days.push((fixed(12, 26), BankHoliday::StStephen));
    }

    if let Some((month, day, since)) = abolition_day(zone) {
        if year >= since {
            days.push((fixed(month, day), BankHoliday::Abolition));
        }
    }

    let mut holidays: Vec<Holiday> = days
        .into_iter()
        .filter_map(|(date, kind)| date.map(|date| Holiday::bank(date, kind.label(locale))))
        .collect();
    holidays.sort();
    holidays
}
