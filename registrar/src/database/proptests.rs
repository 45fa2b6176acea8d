//! Property-based tests for the registration store.
//!
//! Each case runs against its own temporary database.

use crate::database::test_util::create_test_database;
use crate::{Error, RegistrationDetails, WriteOutcome};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((1900i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }))
}

// Distinct emails, each paired with a name and optional date of birth.
fn people_strategy() -> impl Strategy<Value = Vec<RegistrationDetails>> {
    prop::collection::btree_set("[a-z]{1,8}@[a-z]{1,6}\\.com", 1..8).prop_flat_map(|emails| {
        let count = emails.len();
        (
            Just(emails.into_iter().collect::<Vec<_>>()),
            prop::collection::vec(("[A-Za-z ]{0,12}", date_strategy()), count),
        )
            .prop_map(|(emails, rest)| {
                emails
                    .into_iter()
                    .zip(rest)
                    .map(|(email, (name, dob))| {
                        RegistrationDetails::new(name, email).with_date_of_birth(dob)
                    })
                    .collect()
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Every create with a fresh email adds exactly one matching row under a new id
    #[test]
    fn create_adds_exactly_one_matching_row(people in people_strategy()) {
        let mut db = create_test_database();
        let mut ids = BTreeSet::new();

        for (i, person) in people.iter().enumerate() {
            let id = db.create_registration(person).unwrap();
            prop_assert!(ids.insert(id));

            let all = db.list_registrations().unwrap();
            prop_assert_eq!(all.len(), i + 1);
            let stored = all.iter().find(|r| r.id() == id).unwrap();
            prop_assert_eq!(&stored.details(), person);
        }
    }

    // A duplicate email is rejected and the table is unchanged
    #[test]
    fn duplicate_email_rejected(people in people_strategy(), pick in any::<prop::sample::Index>(), name in "[A-Za-z]{1,10}") {
        let mut db = create_test_database();
        for person in &people {
            db.create_registration(person).unwrap();
        }
        let before = db.list_registrations().unwrap();

        let taken = &people[pick.index(people.len())].email;
        let err = db
            .create_registration(&RegistrationDetails::new(name, taken.clone()))
            .unwrap_err();

        prop_assert!(matches!(err, Error::ConstraintViolation { .. }), "expected ConstraintViolation, got {:?}", err);
        prop_assert_eq!(db.list_registrations().unwrap(), before);
    }

    // Deleting a subset leaves exactly the complement, and repeat deletes find nothing
    #[test]
    fn delete_removes_exactly_the_chosen_rows(people in people_strategy(), mask in prop::collection::vec(any::<bool>(), 8)) {
        let mut db = create_test_database();
        let ids: Vec<_> = people
            .iter()
            .map(|p| db.create_registration(p).unwrap())
            .collect();

        let mut kept = BTreeSet::new();
        for (id, delete) in ids.iter().zip(&mask) {
            if *delete {
                prop_assert_eq!(db.delete_registration(*id).unwrap(), WriteOutcome::Applied);
                prop_assert_eq!(db.delete_registration(*id).unwrap(), WriteOutcome::NotFound);
            } else {
                kept.insert(*id);
            }
        }
        // ids beyond the mask length are never deleted
        kept.extend(ids.iter().skip(mask.len()).copied());

        let remaining: BTreeSet<_> = db
            .list_registrations()
            .unwrap()
            .iter()
            .map(crate::Registration::id)
            .collect();
        prop_assert_eq!(remaining, kept);
    }
}
