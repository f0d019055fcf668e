//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with their own `Display` impl and prints a
//! fixed message when empty, matching the empty states of the dashboard
//! screens.

use std::{fmt, ops::Index};

use crate::models::{DailyActivity, Issue, PullRequest, Repo};

macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{}", item)?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection_wrapper!(
    /// Connected repositories.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agentflow_core::display::Repos;
    ///
    /// let repos = Repos(vec![]);
    /// assert_eq!(repos.to_string(), "No repositories connected yet.\n");
    /// ```
    Repos,
    Repo,
    "No repositories connected yet."
);

collection_wrapper!(
    /// Issues, usually the recent issues list.
    Issues,
    Issue,
    "No issues processed yet."
);

collection_wrapper!(
    /// Pull requests for the user's issues.
    PullRequests,
    PullRequest,
    "No pull requests yet."
);

/// Weekly activity rendered as a markdown table, one row per weekday.
pub struct Activity(pub Vec<DailyActivity>);

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|day| day.issues == 0 && day.prs == 0) {
            return writeln!(f, "No activity in the last 7 days.");
        }

        writeln!(f, "| Day | Issues | PRs |")?;
        writeln!(f, "|-----|-------:|----:|")?;
        for day in &self.0 {
            writeln!(f, "| {} | {} | {} |", day.day, day.issues, day.prs)?;
        }
        Ok(())
    }
}
