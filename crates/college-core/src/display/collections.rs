//! Collection wrappers with empty-list handling.

use std::{fmt, ops::Index};

use crate::models::{ScheduleEntry, Student, Teacher};

macro_rules! collection {
    ($(#[$doc:meta])* $wrapper:ident, $item:ty, $empty:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $wrapper(pub Vec<$item>);

        impl $wrapper {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $wrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection!(
    /// Students in the order they were listed.
    Students,
    Student,
    "No students found."
);

collection!(
    /// Teachers in the order they were listed.
    Teachers,
    Teacher,
    "No teachers found."
);

collection!(
    /// Class meetings, ordered by day and start time.
    Schedules,
    ScheduleEntry,
    "No class schedules found."
);
