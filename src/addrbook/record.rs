use crate::error::{AddressBookError, Result};
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, NaiveDate};

/// Outcome of a phone operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneStatus {
    Added,
    AlreadyExists,
    Removed,
    Changed,
    NotFound,
}

/// One contact: a name, its phones in insertion order, an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneStatus> {
        let phone = Phone::new(raw)?;
        if self.phones.contains(&phone) {
            return Ok(PhoneStatus::AlreadyExists);
        }
        self.phones.push(phone);
        Ok(PhoneStatus::Added)
    }

    pub fn remove_phone(&mut self, raw: &str) -> PhoneStatus {
        match self.position_of(raw) {
            Some(idx) => {
                self.phones.remove(idx);
                PhoneStatus::Removed
            }
            None => PhoneStatus::NotFound,
        }
    }

    /// Replaces `old_raw` with `new_raw` at the same position. A `new_raw`
    /// already held elsewhere in the record leaves the phones unchanged.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<PhoneStatus> {
        let Some(idx) = self.position_of(old_raw) else {
            return Ok(PhoneStatus::NotFound);
        };
        let phone = Phone::new(new_raw)?;
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != idx && *p == phone)
        {
            return Ok(PhoneStatus::AlreadyExists);
        }
        self.phones[idx] = phone;
        Ok(PhoneStatus::Changed)
    }

    /// Days until the next birthday, counting `today` as day 1.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Result<i64> {
        let birthday = self
            .birthday
            .ok_or_else(|| AddressBookError::BirthdayNotSet(self.name.to_string()))?;

        let invalid = || AddressBookError::InvalidBirthday(birthday.to_string());
        let mut next = birthday.occurrence_in(today.year()).ok_or_else(invalid)?;
        if next < today {
            next = birthday.occurrence_in(today.year() + 1).ok_or_else(invalid)?;
        }

        Ok((next - today).num_days() + 1)
    }

    /// Name followed by every canonical phone, as one string.
    pub fn search_text(&self) -> String {
        let mut text = self.name.as_str().to_string();
        for phone in &self.phones {
            text.push_str(phone.as_str());
        }
        text
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        let key = Phone::lookup_key(raw)?;
        self.phones.iter().position(|p| p.as_str() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_phone_normalizes_and_deduplicates() {
        let mut rec = record("bob");
        assert_eq!(rec.add_phone("0501234567").unwrap(), PhoneStatus::Added);
        assert_eq!(
            rec.add_phone("+380501234567").unwrap(),
            PhoneStatus::AlreadyExists
        );
        assert_eq!(rec.phones().len(), 1);
        assert_eq!(rec.phones()[0].as_str(), "+380501234567");
    }

    #[test]
    fn add_phone_rejects_invalid() {
        let mut rec = record("bob");
        assert!(matches!(
            rec.add_phone("123"),
            Err(AddressBookError::InvalidPhone(_))
        ));
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn remove_phone_by_any_shape() {
        let mut rec = record("bob");
        rec.add_phone("0501234567").unwrap();
        assert_eq!(rec.remove_phone("80501234567"), PhoneStatus::Removed);
        assert!(rec.phones().is_empty());
        assert_eq!(rec.remove_phone("0501234567"), PhoneStatus::NotFound);
        assert_eq!(rec.remove_phone("not a phone"), PhoneStatus::NotFound);
    }

    #[test]
    fn edit_phone_keeps_position() {
        let mut rec = record("bob");
        rec.add_phone("0501111111").unwrap();
        rec.add_phone("0502222222").unwrap();
        rec.add_phone("0503333333").unwrap();

        assert_eq!(
            rec.edit_phone("0502222222", "0679999999").unwrap(),
            PhoneStatus::Changed
        );
        let phones: Vec<&str> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            phones,
            vec!["+380501111111", "+380679999999", "+380503333333"]
        );
    }

    #[test]
    fn edit_phone_missing_or_invalid() {
        let mut rec = record("bob");
        rec.add_phone("0501111111").unwrap();
        assert_eq!(
            rec.edit_phone("0509999999", "0671111111").unwrap(),
            PhoneStatus::NotFound
        );
        assert!(rec.edit_phone("0501111111", "bad").is_err());
        assert_eq!(rec.phones()[0].as_str(), "+380501111111");
    }

    #[test]
    fn edit_phone_refuses_number_already_held() {
        let mut rec = record("bob");
        rec.add_phone("0501111111").unwrap();
        rec.add_phone("0502222222").unwrap();

        assert_eq!(
            rec.edit_phone("0501111111", "380502222222").unwrap(),
            PhoneStatus::AlreadyExists
        );
        let phones: Vec<&str> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["+380501111111", "+380502222222"]);
    }

    #[test]
    fn edit_phone_to_same_number_in_other_shape() {
        let mut rec = record("bob");
        rec.add_phone("0501111111").unwrap();
        assert_eq!(
            rec.edit_phone("0501111111", "+380501111111").unwrap(),
            PhoneStatus::Changed
        );
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn birthday_today_counts_as_one_day() {
        let mut rec = record("bob");
        rec.set_birthday(Some(Birthday::new(date(1990, 10, 19))));
        assert_eq!(rec.days_to_birthday(date(2026, 10, 19)).unwrap(), 1);
    }

    #[test]
    fn birthday_tomorrow_and_yesterday() {
        let mut rec = record("bob");
        rec.set_birthday(Some(Birthday::new(date(1990, 10, 20))));
        assert_eq!(rec.days_to_birthday(date(2026, 10, 19)).unwrap(), 2);

        rec.set_birthday(Some(Birthday::new(date(1990, 10, 18))));
        // 2026-10-19 -> 2027-10-18 is 364 days
        assert_eq!(rec.days_to_birthday(date(2026, 10, 19)).unwrap(), 365);
    }

    #[test]
    fn leap_day_birthday_in_common_year() {
        let mut rec = record("bob");
        rec.set_birthday(Some(Birthday::new(date(2000, 2, 29))));
        assert_eq!(rec.days_to_birthday(date(2026, 2, 28)).unwrap(), 2);
        assert_eq!(rec.days_to_birthday(date(2028, 2, 28)).unwrap(), 2);
    }

    #[test]
    fn birthday_not_set() {
        let rec = record("bob");
        assert!(matches!(
            rec.days_to_birthday(date(2026, 1, 1)),
            Err(AddressBookError::BirthdayNotSet(ref n)) if n == "bob"
        ));
    }

    #[test]
    fn search_text_joins_name_and_phones() {
        let mut rec = record("bob");
        rec.add_phone("0501234567").unwrap();
        rec.add_phone("0671234567").unwrap();
        assert_eq!(rec.search_text(), "bob+380501234567+380671234567");
    }
}
