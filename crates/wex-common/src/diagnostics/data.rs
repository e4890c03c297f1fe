//! Diagnostic codes and message templates.
//!
//! Ranges:
//! - 1000..1099 parser
//! - 2000..2099 general expression binding (names, members, conversions)
//! - 2100..2199 update (`with`) expressions
//! - 2900..2999 use-site problems discovered while walking type definitions

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    // Parser
    pub const EXPRESSION_EXPECTED: u32 = 1000;
    pub const TOKEN_EXPECTED: u32 = 1001;
    pub const IDENTIFIER_EXPECTED: u32 = 1002;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1003;
    pub const INVALID_CHARACTER: u32 = 1004;
    pub const INVALID_NUMERIC_LITERAL: u32 = 1005;
    pub const UNEXPECTED_TOKEN_AFTER_EXPRESSION: u32 = 1006;

    // Expression binding
    pub const NAME_DOES_NOT_EXIST: u32 = 2000;
    pub const MEMBER_NOT_FOUND: u32 = 2001;
    pub const MEMBER_INACCESSIBLE: u32 = 2002;
    pub const STATIC_MEMBER_VIA_INSTANCE: u32 = 2003;
    pub const MEMBER_NOT_INVOCABLE: u32 = 2004;
    pub const NO_OVERLOAD_TAKES_ZERO_ARGUMENTS: u32 = 2005;
    pub const METHOD_GROUP_AS_VALUE: u32 = 2006;
    pub const CANNOT_IMPLICITLY_CONVERT: u32 = 2007;
    pub const CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS: u32 = 2008;
    pub const PROPERTY_IS_READ_ONLY: u32 = 2009;
    pub const READONLY_FIELD_NOT_ASSIGNABLE: u32 = 2010;
    pub const METHOD_GROUP_NOT_ASSIGNABLE: u32 = 2011;
    pub const INIT_ONLY_PROPERTY_NOT_ASSIGNABLE: u32 = 2012;
    pub const EXPRESSION_TOO_DEEPLY_NESTED: u32 = 2013;

    // Update expressions
    pub const INVALID_UPDATE_RECEIVER_TYPE: u32 = 2100;
    pub const NO_SINGLE_CLONE_METHOD: u32 = 2101;
    pub const CONTAINING_TYPE_MUST_DERIVE_FROM_WITH_RETURN_TYPE: u32 = 2102;
    pub const AMBIGUOUS_CLONE_METHOD: u32 = 2103;

    // Use-site
    pub const BASE_TYPE_UNRESOLVED: u32 = 2900;
}

pub mod diagnostic_messages {
    pub const EXPRESSION_EXPECTED: &str = "Expression expected.";
    pub const TOKEN_EXPECTED: &str = "'{0}' expected.";
    pub const IDENTIFIER_EXPECTED: &str = "Identifier expected.";
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const INVALID_CHARACTER: &str = "Invalid character.";
    pub const INVALID_NUMERIC_LITERAL: &str = "Numeric literal '{0}' is out of range.";
    pub const UNEXPECTED_TOKEN_AFTER_EXPRESSION: &str = "Unexpected token '{0}' after expression.";

    pub const NAME_DOES_NOT_EXIST: &str = "The name '{0}' does not exist in the current context.";
    pub const MEMBER_NOT_FOUND: &str = "'{0}' does not contain a definition for '{1}'.";
    pub const MEMBER_INACCESSIBLE: &str = "'{0}' is inaccessible due to its protection level.";
    pub const STATIC_MEMBER_VIA_INSTANCE: &str =
        "Member '{0}' cannot be accessed with an instance reference.";
    pub const MEMBER_NOT_INVOCABLE: &str =
        "Non-invocable member '{0}' cannot be used like a method.";
    pub const NO_OVERLOAD_TAKES_ZERO_ARGUMENTS: &str = "No overload for method '{0}' takes 0 arguments.";
    pub const METHOD_GROUP_AS_VALUE: &str =
        "Method '{0}' cannot be used as a value; did you intend to invoke it?";
    pub const CANNOT_IMPLICITLY_CONVERT: &str = "Cannot implicitly convert type '{0}' to '{1}'.";
    pub const CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS: &str = "Cannot implicitly convert type '{0}' to '{1}'. An explicit conversion exists (are you missing a cast?)";
    pub const PROPERTY_IS_READ_ONLY: &str =
        "Property '{0}' cannot be assigned to -- it is read only.";
    pub const READONLY_FIELD_NOT_ASSIGNABLE: &str =
        "A readonly field '{0}' cannot be assigned to (except in a constructor or a variable initializer).";
    pub const METHOD_GROUP_NOT_ASSIGNABLE: &str =
        "Cannot assign to '{0}' because it is a 'method group'.";
    pub const INIT_ONLY_PROPERTY_NOT_ASSIGNABLE: &str = "Init-only property '{0}' can only be assigned in an object initializer or a 'with' expression.";
    pub const EXPRESSION_TOO_DEEPLY_NESTED: &str = "Expression is too deeply nested to bind.";

    pub const INVALID_UPDATE_RECEIVER_TYPE: &str =
        "The receiver of a 'with' expression must have a non-void type.";
    pub const NO_SINGLE_CLONE_METHOD: &str = "The receiver type '{0}' does not have an accessible parameterless instance method named 'Clone'.";
    pub const CONTAINING_TYPE_MUST_DERIVE_FROM_WITH_RETURN_TYPE: &str =
        "The receiver type '{0}' must be the same as or derive from the 'Clone' return type '{1}'.";
    pub const AMBIGUOUS_CLONE_METHOD: &str =
        "The 'Clone' method of '{0}' is ambiguous between '{1}' and '{2}'.";

    pub const BASE_TYPE_UNRESOLVED: &str = "The base type '{0}' of '{1}' could not be resolved.";
}

macro_rules! message_table {
    ($($name:ident),* $(,)?) => {
        /// All known diagnostic messages, indexed by code at lookup time.
        pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
            $(DiagnosticMessage {
                code: diagnostic_codes::$name,
                category: DiagnosticCategory::Error,
                message: diagnostic_messages::$name,
            },)*
        ];
    };
}

message_table![
    EXPRESSION_EXPECTED,
    TOKEN_EXPECTED,
    IDENTIFIER_EXPECTED,
    UNTERMINATED_STRING_LITERAL,
    INVALID_CHARACTER,
    INVALID_NUMERIC_LITERAL,
    UNEXPECTED_TOKEN_AFTER_EXPRESSION,
    NAME_DOES_NOT_EXIST,
    MEMBER_NOT_FOUND,
    MEMBER_INACCESSIBLE,
    STATIC_MEMBER_VIA_INSTANCE,
    MEMBER_NOT_INVOCABLE,
    NO_OVERLOAD_TAKES_ZERO_ARGUMENTS,
    METHOD_GROUP_AS_VALUE,
    CANNOT_IMPLICITLY_CONVERT,
    CANNOT_IMPLICITLY_CONVERT_EXPLICIT_EXISTS,
    PROPERTY_IS_READ_ONLY,
    READONLY_FIELD_NOT_ASSIGNABLE,
    METHOD_GROUP_NOT_ASSIGNABLE,
    INIT_ONLY_PROPERTY_NOT_ASSIGNABLE,
    EXPRESSION_TOO_DEEPLY_NESTED,
    INVALID_UPDATE_RECEIVER_TYPE,
    NO_SINGLE_CLONE_METHOD,
    CONTAINING_TYPE_MUST_DERIVE_FROM_WITH_RETURN_TYPE,
    AMBIGUOUS_CLONE_METHOD,
    BASE_TYPE_UNRESOLVED,
];
