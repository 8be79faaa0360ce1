use crate::models::{CoreError, CoreErrorKind, CoreResult};
use crate::registry::{NamespaceLoader, Symbol};

/// `operator_class` split on its final separator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperatorClass<'a> {
    pub namespace: &'a str,
    pub symbol: &'a str,
}

#[derive(Clone, Debug)]
pub struct ResolvedSymbol {
    pub namespace: String,
    pub name: String,
    pub symbol: Symbol,
}

pub fn parse_operator_class(operator_class: &str) -> CoreResult<OperatorClass<'_>> {
    let Some((namespace, symbol)) = operator_class.rsplit_once('.') else {
        return Err(malformed(
            operator_class,
            format!("operator class '{operator_class}' has no namespace separator"),
        ));
    };

    if namespace.is_empty() || symbol.is_empty() {
        return Err(malformed(
            operator_class,
            format!("operator class '{operator_class}' has an empty namespace or symbol"),
        ));
    }

    Ok(OperatorClass { namespace, symbol })
}

pub fn resolve_symbol(
    loader: &dyn NamespaceLoader,
    operator_class: &str,
) -> CoreResult<ResolvedSymbol> {
    let parsed = parse_operator_class(operator_class)?;

    let namespace = loader.load(parsed.namespace).ok_or_else(|| CoreError {
        task: None,
        operator_class: Some(operator_class.to_string()),
        kind: CoreErrorKind::NamespaceNotFound,
        message: format!("namespace '{}' is not registered", parsed.namespace),
    })?;

    let symbol = namespace
        .symbol(parsed.symbol)
        .cloned()
        .ok_or_else(|| CoreError {
            task: None,
            operator_class: Some(operator_class.to_string()),
            kind: CoreErrorKind::SymbolNotFound,
            message: format!(
                "namespace '{}' has no symbol '{}'",
                parsed.namespace, parsed.symbol
            ),
        })?;

    tracing::debug!(
        operator_class,
        namespace = parsed.namespace,
        symbol = parsed.symbol,
        "resolved operator class"
    );

    Ok(ResolvedSymbol {
        namespace: parsed.namespace.to_string(),
        name: parsed.symbol.to_string(),
        symbol,
    })
}

fn malformed(operator_class: &str, message: String) -> CoreError {
    CoreError {
        task: None,
        operator_class: Some(operator_class.to_string()),
        kind: CoreErrorKind::MalformedIdentifier,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{OperatorClass, parse_operator_class};
    use crate::models::CoreErrorKind;

    #[test]
    fn splits_on_final_separator() {
        assert_eq!(
            parse_operator_class("pkg.mod.RealOp").unwrap(),
            OperatorClass {
                namespace: "pkg.mod",
                symbol: "RealOp",
            }
        );
        assert_eq!(
            parse_operator_class("mod.Op").unwrap(),
            OperatorClass {
                namespace: "mod",
                symbol: "Op",
            }
        );
    }

    #[test]
    fn rejects_names_without_separator() {
        let error = parse_operator_class("RealOp").unwrap_err();
        assert_eq!(error.kind, CoreErrorKind::MalformedIdentifier);
        assert_eq!(error.operator_class.as_deref(), Some("RealOp"));
    }

    #[test]
    fn rejects_empty_segments() {
        for name in [".RealOp", "pkg.mod.", "."] {
            let error = parse_operator_class(name).unwrap_err();
            assert_eq!(error.kind, CoreErrorKind::MalformedIdentifier, "{name}");
        }
    }
}
