//! Built-in primitives shipped with the library

use super::{PrimitiveDefinition, PrimitiveKind, ValueType};

struct Builtin {
    class: &'static str,
    kind: PrimitiveKind,
    input_types: &'static [ValueType],
    return_type: ValueType,
    description: &'static str,
    stack_on_self: bool,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        class: "Count",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Id],
        return_type: ValueType::Numeric,
        description: "Determines the total number of values, excluding nulls.",
        stack_on_self: false,
    },
    Builtin {
        class: "Sum",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Calculates the total addition, ignoring nulls.",
        stack_on_self: false,
    },
    Builtin {
        class: "Mean",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Computes the average for a list of values.",
        stack_on_self: true,
    },
    Builtin {
        class: "Max",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Calculates the highest value, ignoring nulls.",
        stack_on_self: false,
    },
    Builtin {
        class: "Min",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Calculates the smallest value, ignoring nulls.",
        stack_on_self: false,
    },
    Builtin {
        class: "Std",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Computes the dispersion relative to the mean value, ignoring nulls.",
        stack_on_self: true,
    },
    Builtin {
        class: "Mode",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Categorical],
        return_type: ValueType::Categorical,
        description: "Determines the most commonly repeated value.",
        stack_on_self: true,
    },
    Builtin {
        class: "NumUnique",
        kind: PrimitiveKind::Aggregation,
        input_types: &[ValueType::Categorical],
        return_type: ValueType::Numeric,
        description: "Determines the number of distinct values, ignoring nulls.",
        stack_on_self: false,
    },
    Builtin {
        class: "Absolute",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Numeric],
        return_type: ValueType::Numeric,
        description: "Computes the absolute value of a number.",
        stack_on_self: true,
    },
    Builtin {
        class: "IsNull",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Any],
        return_type: ValueType::Boolean,
        description: "Determines if a value is null.",
        stack_on_self: true,
    },
    Builtin {
        class: "CumSum",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Numeric, ValueType::Id],
        return_type: ValueType::Numeric,
        description: "Calculates the cumulative sum.",
        stack_on_self: false,
    },
    Builtin {
        class: "Day",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Datetime],
        return_type: ValueType::Numeric,
        description: "Determines the day of the month from a datetime.",
        stack_on_self: true,
    },
    Builtin {
        class: "Month",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Datetime],
        return_type: ValueType::Numeric,
        description: "Determines the month value of a datetime.",
        stack_on_self: true,
    },
    Builtin {
        class: "Year",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Datetime],
        return_type: ValueType::Numeric,
        description: "Determines the year value of a datetime.",
        stack_on_self: true,
    },
    Builtin {
        class: "NumWords",
        kind: PrimitiveKind::Transform,
        input_types: &[ValueType::Text],
        return_type: ValueType::Numeric,
        description: "Determines the number of words in a string.",
        stack_on_self: true,
    },
];

/// All built-in primitive definitions
pub fn builtin_primitives() -> Vec<PrimitiveDefinition> {
    BUILTINS
        .iter()
        .map(|b| PrimitiveDefinition {
            class_name: b.class.to_string(),
            kind: b.kind,
            input_types: b.input_types.to_vec(),
            return_type: b.return_type,
            description: Some(b.description.to_string()),
            stack_on_self: b.stack_on_self,
        })
        .collect()
}
