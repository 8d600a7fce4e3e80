use chrono::{Datelike, NaiveDate};

/// 获取当前本地日期
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Calendar year shown in the page footer
pub fn footer_year(today: NaiveDate) -> i32 {
    today.year()
}
