// Validate that an int value is not below zero
#[macro_export]
macro_rules! validate_non_negative {
    ($($arg:expr),*) => {
        {
            $(
                let value: Option<i128> = Into::<Option<_>>::into($arg);
                if let Some(val) = value {
                    if val < 0 {
                        panic!("value cannot be negative")
                    }
                }
            )*
        }
    };
}
