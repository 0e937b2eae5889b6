use propbind::Bindable;
use std::fmt::Debug;

#[derive(Bindable, Clone, Debug)]
pub struct Pair<K: Clone + Debug, V>
where
    V: Clone,
{
    pub key: K,
    pub value: Option<V>,
    pub r#type: String,
}

#[derive(Bindable, Clone, Default)]
struct Empty;

fn main() {
    let pair = PairBinding::with_value(Pair {
        key: 1_u8,
        value: Some("one"),
        r#type: "entry".to_string(),
    });

    let _ = pair.key().get();
    let _ = pair.value().get();
    let _ = pair.type_property().get();
    let _ = EmptyBinding::new();
}
