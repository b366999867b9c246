#[macro_export]
macro_rules! path {
    (
        $( $part:expr ),+ $(,)?
    ) => {
        [ $( $part, )+ ].into_iter().map(String::from).collect::<$crate::schema::FieldPath>()
    };
}
