#![deny(clippy::unwrap_used)]

pub mod group_id;
pub mod grouper;
pub mod normalizer;
pub mod patterns;
pub mod report;
pub mod repository;
pub mod variant;
pub mod vocab;

#[derive(Debug)]
pub struct SqlWrapper<T>(pub T);

impl<T> SqlWrapper<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn from_sql<R>(r: R) -> Result<T, <Self as TryFrom<R>>::Error>
    where
        Self: TryFrom<R>,
    {
        r.try_into().map(|w: Self| w.0)
    }
}
