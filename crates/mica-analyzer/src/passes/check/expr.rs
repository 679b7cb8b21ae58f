//! Expression typing.

use mica_ast::{
    ArrayLit, AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, FieldExpr, IdentExpr, IndexExpr,
    LiteralKind, StructLit, UnaryExpr, UnaryOp,
};
use mica_core::{AnalysisError, Type};

use crate::conversion::{is_convertible, join_numeric};
use crate::passes::Result;

use super::CheckPass;

impl CheckPass<'_> {
    /// Infer an expression's type, recording it in the type table.
    ///
    /// Every reachable expression node passes through here exactly once,
    /// so the table ends up total over the program's expressions.
    pub(super) fn infer(&mut self, expr: &Expr) -> Result<Type> {
        let ty = match expr {
            Expr::Literal(e) => match &e.kind {
                LiteralKind::Int(_) => Type::INT,
                LiteralKind::Long(_) => Type::LONG,
                LiteralKind::Double(_) => Type::DOUBLE,
                LiteralKind::Bool(_) => Type::BOOLEAN,
                LiteralKind::Str(_) => Type::STRING,
                LiteralKind::Null => Type::NULL,
            },
            Expr::Ident(e) => self.infer_ident(e)?,
            Expr::Binary(e) => self.infer_binary(e)?,
            Expr::Unary(e) => self.infer_unary(e)?,
            Expr::Assign(e) => self.infer_assign(e)?,
            Expr::Call(e) => self.infer_call(e)?,
            Expr::Field(e) => self.infer_field(e)?,
            Expr::Index(e) => self.infer_index(e)?,
            Expr::ArrayLit(e) => self.infer_array_lit(e)?,
            Expr::StructLit(e) => self.infer_struct_lit(e)?,
        };
        Ok(self.record(expr.id(), ty))
    }

    /// Check an expression against an expected type.
    pub(super) fn expect(&mut self, expr: &Expr, expected: &Type) -> Result<()> {
        let found = self.infer(expr)?;
        if !is_convertible(&found, expected) {
            return Err(AnalysisError::TypeMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
                span: expr.span(),
            });
        }
        Ok(())
    }

    fn infer_ident(&mut self, e: &IdentExpr) -> Result<Type> {
        match self.bindings.get(&e.id) {
            Some(binding) => Ok(binding.ty.clone()),
            // Function names are not values in Mica; outside the
            // assignment-target case handled in `infer_assign`, a bare
            // function name is as unknown as any other unbound name.
            None => Err(AnalysisError::UnknownVariable {
                name: e.name.name.clone(),
                span: e.name.span,
            }),
        }
    }

    fn infer_binary(&mut self, e: &BinaryExpr) -> Result<Type> {
        let lhs = self.infer(&e.lhs)?;
        let rhs = self.infer(&e.rhs)?;
        match e.op {
            BinaryOp::Add if lhs.is_string() && rhs.is_string() => Ok(Type::STRING),
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                join_numeric(&lhs, &rhs).ok_or_else(|| AnalysisError::TypeMismatch {
                    expected: "a numeric type".into(),
                    found: if lhs.is_numeric() { rhs } else { lhs }.to_string(),
                    span: e.span,
                })
            }
            BinaryOp::Rem => match join_numeric(&lhs, &rhs) {
                Some(ty) if lhs.is_integral() && rhs.is_integral() => Ok(ty),
                _ => Err(AnalysisError::TypeMismatch {
                    expected: "an integral type".into(),
                    found: if lhs.is_integral() { rhs } else { lhs }.to_string(),
                    span: e.span,
                }),
            },
            BinaryOp::And | BinaryOp::Or => {
                for (side, ty) in [(&e.lhs, &lhs), (&e.rhs, &rhs)] {
                    if !ty.is_boolean() {
                        return Err(AnalysisError::TypeMismatch {
                            expected: Type::BOOLEAN.to_string(),
                            found: ty.to_string(),
                            span: side.span(),
                        });
                    }
                }
                Ok(Type::BOOLEAN)
            }
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
                let comparable = join_numeric(&lhs, &rhs).is_some()
                    || (lhs.is_string() && rhs.is_string());
                if comparable {
                    Ok(Type::BOOLEAN)
                } else {
                    Err(AnalysisError::TypeMismatch {
                        expected: lhs.to_string(),
                        found: rhs.to_string(),
                        span: e.span,
                    })
                }
            }
            BinaryOp::Eq | BinaryOp::Ne => {
                if is_convertible(&lhs, &rhs) || is_convertible(&rhs, &lhs) {
                    Ok(Type::BOOLEAN)
                } else {
                    Err(AnalysisError::TypeMismatch {
                        expected: lhs.to_string(),
                        found: rhs.to_string(),
                        span: e.span,
                    })
                }
            }
        }
    }

    fn infer_unary(&mut self, e: &UnaryExpr) -> Result<Type> {
        let operand = self.infer(&e.operand)?;
        match e.op {
            UnaryOp::Neg | UnaryOp::Pos => {
                if operand.is_numeric() {
                    Ok(operand)
                } else {
                    Err(AnalysisError::TypeMismatch {
                        expected: "a numeric type".into(),
                        found: operand.to_string(),
                        span: e.operand.span(),
                    })
                }
            }
            UnaryOp::Not => {
                if operand.is_boolean() {
                    Ok(Type::BOOLEAN)
                } else {
                    Err(AnalysisError::TypeMismatch {
                        expected: Type::BOOLEAN.to_string(),
                        found: operand.to_string(),
                        span: e.operand.span(),
                    })
                }
            }
        }
    }

    fn infer_assign(&mut self, e: &AssignExpr) -> Result<Type> {
        if !e.target.is_lvalue() {
            return Err(AnalysisError::InvalidAssignTarget {
                span: e.target.span(),
            });
        }
        // An identifier that names a function rather than a variable is
        // syntactically a place but not assignable.
        if let Expr::Ident(ident) = &e.target {
            if !self.bindings.contains_key(&ident.id)
                && self.env.lookup_function(&ident.name.name).is_some()
            {
                return Err(AnalysisError::InvalidAssignTarget {
                    span: ident.name.span,
                });
            }
        }
        let target = self.infer(&e.target)?;
        self.expect(&e.value, &target)?;
        Ok(target)
    }

    fn infer_call(&mut self, e: &CallExpr) -> Result<Type> {
        let id = self
            .call_targets
            .get(&e.id)
            .copied()
            .unwrap_or_else(|| panic!("call {:?} not resolved", e.id));
        let (params, ret, name) = {
            let def = self.env.func(id);
            (def.params.clone(), def.ret.clone(), def.name.clone())
        };
        if e.args.len() != params.len() {
            return Err(AnalysisError::ArityMismatch {
                name,
                expected: params.len(),
                found: e.args.len(),
                span: e.span,
            });
        }
        for (arg, param) in e.args.iter().zip(&params) {
            self.expect(arg, param)?;
        }
        Ok(ret)
    }

    fn infer_field(&mut self, e: &FieldExpr) -> Result<Type> {
        let base = self.infer(&e.base)?;
        match &base {
            // Arrays expose a single built-in field.
            Type::Array(_) if e.field.name == "length" => Ok(Type::INT),
            Type::Struct(name) => {
                let def = self
                    .env
                    .struct_def(name)
                    .unwrap_or_else(|| panic!("struct '{name}' missing from environment"));
                def.field_type(&e.field.name)
                    .cloned()
                    .ok_or_else(|| AnalysisError::UnknownField {
                        base: base.to_string(),
                        field: e.field.name.clone(),
                        span: e.field.span,
                    })
            }
            _ => Err(AnalysisError::UnknownField {
                base: base.to_string(),
                field: e.field.name.clone(),
                span: e.field.span,
            }),
        }
    }

    fn infer_index(&mut self, e: &IndexExpr) -> Result<Type> {
        let base = self.infer(&e.base)?;
        let elem = match base.elem_type() {
            Some(elem) => elem.clone(),
            None => {
                return Err(AnalysisError::TypeMismatch {
                    expected: "an array type".into(),
                    found: base.to_string(),
                    span: e.base.span(),
                });
            }
        };
        let index = self.infer(&e.index)?;
        if !index.is_integral() {
            return Err(AnalysisError::TypeMismatch {
                expected: "an integral type".into(),
                found: index.to_string(),
                span: e.index.span(),
            });
        }
        Ok(elem)
    }

    fn infer_array_lit(&mut self, e: &ArrayLit) -> Result<Type> {
        let elem = self.resolved_type(e.elem_ty.id);
        for element in &e.elements {
            self.expect(element, &elem)?;
        }
        Ok(elem.array_of())
    }

    /// A constructor takes either no arguments (fields start null/zero)
    /// or exactly one per declared field, in field order.
    fn infer_struct_lit(&mut self, e: &StructLit) -> Result<Type> {
        let ty = self.resolved_type(e.ty.id);
        let name = match ty.struct_name() {
            Some(name) => name.to_string(),
            None => {
                return Err(AnalysisError::TypeMismatch {
                    expected: "a struct type".into(),
                    found: ty.to_string(),
                    span: e.ty.span,
                });
            }
        };
        let fields = self
            .env
            .struct_def(&name)
            .unwrap_or_else(|| panic!("struct '{name}' missing from environment"))
            .fields
            .clone();
        if !e.args.is_empty() && e.args.len() != fields.len() {
            return Err(AnalysisError::ArityMismatch {
                name,
                expected: fields.len(),
                found: e.args.len(),
                span: e.span,
            });
        }
        for (arg, (_, field_ty)) in e.args.iter().zip(&fields) {
            self.expect(arg, field_ty)?;
        }
        Ok(ty)
    }
}
