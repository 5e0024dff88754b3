pub mod difficulty;
pub mod question;
pub mod stats;

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}
pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}
