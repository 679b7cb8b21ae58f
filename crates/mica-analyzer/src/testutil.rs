//! AST fixture factory for the pass unit tests.
//!
//! Builds owned AST fragments with sequential node ids and distinct
//! spans, so tests can assert on which declaration a diagnostic points
//! at without hand-numbering every node.

use mica_ast::{
    ArrayLit, AssertStmt, AssignExpr, BinaryExpr, BinaryOp, Block, BreakStmt, CallExpr,
    ContinueStmt, Decl, Expr, ExprStmt, FieldDecl, FieldExpr, ForInit, ForStmt, FunctionDecl,
    Ident, IdentExpr, IfStmt, IndexExpr, LiteralExpr, LiteralKind, Param, Program, ReturnStmt,
    Stmt, StructDecl, StructLit, TypeExpr, TypeExprKind, UnaryExpr, UnaryOp, VarDecl, WhileStmt,
};
use mica_core::{NodeId, NodeIdGen, Span};

pub struct Ast {
    ids: NodeIdGen,
    line: u32,
}

impl Ast {
    pub fn new() -> Self {
        Self {
            ids: NodeIdGen::new(),
            line: 0,
        }
    }

    fn id(&mut self) -> NodeId {
        self.ids.next_id()
    }

    /// Each call yields a span on a fresh line, so every node has a
    /// distinguishable location.
    pub fn span(&mut self) -> Span {
        self.line += 1;
        Span::new(self.line, 1, 1)
    }

    pub fn ident(&mut self, name: &str) -> Ident {
        Ident {
            name: name.to_string(),
            span: self.span(),
        }
    }

    // ----- types -----

    pub fn named_ty(&mut self, name: &str) -> TypeExpr {
        TypeExpr {
            id: self.id(),
            kind: TypeExprKind::Named(name.to_string()),
            span: self.span(),
        }
    }

    pub fn array_ty(&mut self, elem: TypeExpr) -> TypeExpr {
        TypeExpr {
            id: self.id(),
            span: elem.span,
            kind: TypeExprKind::Array(Box::new(elem)),
        }
    }

    // ----- expressions -----

    fn literal(&mut self, kind: LiteralKind) -> Expr {
        Expr::Literal(LiteralExpr {
            id: self.id(),
            kind,
            span: self.span(),
        })
    }

    pub fn int(&mut self, value: i64) -> Expr {
        self.literal(LiteralKind::Int(value))
    }

    pub fn long(&mut self, value: i64) -> Expr {
        self.literal(LiteralKind::Long(value))
    }

    pub fn double(&mut self, value: f64) -> Expr {
        self.literal(LiteralKind::Double(value))
    }

    pub fn boolean(&mut self, value: bool) -> Expr {
        self.literal(LiteralKind::Bool(value))
    }

    pub fn string(&mut self, value: &str) -> Expr {
        self.literal(LiteralKind::Str(value.to_string()))
    }

    pub fn null(&mut self) -> Expr {
        self.literal(LiteralKind::Null)
    }

    pub fn var(&mut self, name: &str) -> Expr {
        let ident = self.ident(name);
        Expr::Ident(IdentExpr {
            id: self.id(),
            span: ident.span,
            name: ident,
        })
    }

    pub fn bin(&mut self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(Box::new(BinaryExpr {
            id: self.id(),
            op,
            span: lhs.span(),
            lhs,
            rhs,
        }))
    }

    pub fn un(&mut self, op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary(Box::new(UnaryExpr {
            id: self.id(),
            op,
            span: operand.span(),
            operand,
        }))
    }

    pub fn assign(&mut self, target: Expr, value: Expr) -> Expr {
        Expr::Assign(Box::new(AssignExpr {
            id: self.id(),
            span: target.span(),
            target,
            value,
        }))
    }

    pub fn call(&mut self, name: &str, args: Vec<Expr>) -> Expr {
        let callee = self.ident(name);
        Expr::Call(CallExpr {
            id: self.id(),
            span: callee.span,
            callee,
            args,
        })
    }

    pub fn field(&mut self, base: Expr, name: &str) -> Expr {
        let field = self.ident(name);
        Expr::Field(Box::new(FieldExpr {
            id: self.id(),
            span: base.span(),
            base,
            field,
        }))
    }

    pub fn index(&mut self, base: Expr, index: Expr) -> Expr {
        Expr::Index(Box::new(IndexExpr {
            id: self.id(),
            span: base.span(),
            base,
            index,
        }))
    }

    pub fn array_lit(&mut self, elem_ty: TypeExpr, elements: Vec<Expr>) -> Expr {
        Expr::ArrayLit(ArrayLit {
            id: self.id(),
            span: elem_ty.span,
            elem_ty,
            elements,
        })
    }

    pub fn struct_lit(&mut self, name: &str, args: Vec<Expr>) -> Expr {
        let ty = self.named_ty(name);
        Expr::StructLit(StructLit {
            id: self.id(),
            span: ty.span,
            ty,
            args,
        })
    }

    // ----- statements -----

    pub fn expr_stmt(&mut self, expr: Expr) -> Stmt {
        Stmt::Expr(ExprStmt {
            span: expr.span(),
            expr,
        })
    }

    pub fn var_decl(&mut self, ty: TypeExpr, name: &str, init: Option<Expr>) -> VarDecl {
        let name = self.ident(name);
        VarDecl {
            id: self.id(),
            span: name.span,
            ty,
            name,
            init,
        }
    }

    pub fn var_decl_stmt(&mut self, ty: TypeExpr, name: &str, init: Option<Expr>) -> Stmt {
        Stmt::VarDecl(self.var_decl(ty, name, init))
    }

    pub fn block(&mut self, stmts: Vec<Stmt>) -> Block {
        Block {
            stmts,
            span: self.span(),
        }
    }

    pub fn if_stmt(&mut self, cond: Expr, then_block: Block, else_block: Option<Block>) -> Stmt {
        Stmt::If(Box::new(IfStmt {
            span: cond.span(),
            cond,
            then_block,
            else_block,
        }))
    }

    pub fn while_stmt(&mut self, cond: Expr, body: Block) -> Stmt {
        Stmt::While(Box::new(WhileStmt {
            span: cond.span(),
            cond,
            body,
        }))
    }

    pub fn for_stmt(
        &mut self,
        init: Option<ForInit>,
        cond: Option<Expr>,
        update: Option<Expr>,
        body: Block,
    ) -> Stmt {
        Stmt::For(Box::new(ForStmt {
            span: body.span,
            init,
            cond,
            update,
            body,
        }))
    }

    pub fn ret(&mut self, value: Option<Expr>) -> Stmt {
        Stmt::Return(ReturnStmt {
            span: self.span(),
            value,
        })
    }

    pub fn brk(&mut self) -> Stmt {
        Stmt::Break(BreakStmt { span: self.span() })
    }

    pub fn cont(&mut self) -> Stmt {
        Stmt::Continue(ContinueStmt { span: self.span() })
    }

    pub fn assert_stmt(&mut self, cond: Expr, message: Option<Expr>) -> Stmt {
        Stmt::Assert(AssertStmt {
            span: cond.span(),
            cond,
            message,
        })
    }

    // ----- declarations -----

    pub fn strukt(&mut self, name: &str, fields: Vec<(TypeExpr, &str)>) -> Decl {
        let name = self.ident(name);
        let fields = fields
            .into_iter()
            .map(|(ty, field)| {
                let field = self.ident(field);
                FieldDecl {
                    id: self.id(),
                    span: field.span,
                    ty,
                    name: field,
                }
            })
            .collect();
        Decl::Struct(StructDecl {
            id: self.id(),
            span: name.span,
            name,
            fields,
        })
    }

    pub fn func(
        &mut self,
        ret: TypeExpr,
        name: &str,
        params: Vec<(TypeExpr, &str)>,
        body: Block,
    ) -> Decl {
        let name = self.ident(name);
        let params = params
            .into_iter()
            .map(|(ty, param)| {
                let param = self.ident(param);
                Param {
                    id: self.id(),
                    span: param.span,
                    ty,
                    name: param,
                }
            })
            .collect();
        Decl::Function(FunctionDecl {
            id: self.id(),
            span: name.span,
            ret,
            name,
            params,
            body,
        })
    }

    pub fn program(&mut self, decls: Vec<Decl>) -> Program {
        Program {
            decls,
            span: Span::new(1, 1, 0),
        }
    }
}
