use knuffel::ast::Literal;
use knuffel::errors::DecodeError;

/// Number that may be written either as an integer or as a decimal.
// MIN and MAX are only checked during parsing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FloatOrInt<const MIN: i32, const MAX: i32>(pub f64);

impl<const MIN: i32, const MAX: i32> FloatOrInt<MIN, MAX> {
    fn check<S: knuffel::traits::ErrorSpan>(
        value: f64,
        val: &knuffel::span::Spanned<Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Self {
        if (f64::from(MIN)..=f64::from(MAX)).contains(&value) {
            Self(value)
        } else {
            ctx.emit_error(DecodeError::conversion(
                val,
                format!("value must be between {MIN} and {MAX}"),
            ));
            Self::default()
        }
    }
}

impl<S: knuffel::traits::ErrorSpan, const MIN: i32, const MAX: i32> knuffel::DecodeScalar<S>
    for FloatOrInt<MIN, MAX>
{
    fn type_check(
        type_name: &Option<knuffel::span::Spanned<knuffel::ast::TypeName, S>>,
        ctx: &mut knuffel::decode::Context<S>,
    ) {
        if let Some(type_name) = &type_name {
            ctx.emit_error(DecodeError::unexpected(
                type_name,
                "type name",
                "no type name expected for this node",
            ));
        }
    }

    fn raw_decode(
        val: &knuffel::span::Spanned<Literal, S>,
        ctx: &mut knuffel::decode::Context<S>,
    ) -> Result<Self, DecodeError<S>> {
        let value = match &**val {
            Literal::Int(value) => i32::try_from(value)
                .map(f64::from)
                .map_err(|err| err.to_string()),
            Literal::Decimal(value) => f64::try_from(value).map_err(|err| err.to_string()),
            _ => {
                ctx.emit_error(DecodeError::unsupported(val, "expected a number"));
                return Ok(Self::default());
            }
        };

        match value {
            Ok(value) => Ok(Self::check(value, val, ctx)),
            Err(err) => {
                ctx.emit_error(DecodeError::conversion(val, err));
                Ok(Self::default())
            }
        }
    }
}
