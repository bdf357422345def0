//! Shared AST builders for tests.

use crate::ast::{AssignOp, BinOp, Block, Expr, Program, Stmt, UnaryOp};

pub fn program(stmts: Vec<Stmt>) -> Program {
    Program { stmts }
}

pub fn lit(text: &str) -> Expr {
    Expr::Literal(text.to_string())
}

pub fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_string())
}

pub fn call(name: &str) -> Expr {
    Expr::Call(name.to_string())
}

pub fn paren(inner: Expr) -> Expr {
    Expr::Paren(Box::new(inner))
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::Unary {
        op,
        operand: Box::new(operand),
    }
}

pub fn bin(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub fn assign(target: &str, value: Expr) -> Expr {
    Expr::Assign {
        target: target.to_string(),
        value: Box::new(value),
    }
}

pub fn assign_op(target: &str, op: AssignOp, value: Expr) -> Expr {
    Expr::AssignOp {
        target: target.to_string(),
        op,
        value: Box::new(value),
    }
}

pub fn sensor(entity: &str, attr: &str) -> Expr {
    Expr::Sensor {
        entity: entity.to_string(),
        attr: attr.to_string(),
    }
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(expr)
}

pub fn print(args: Vec<Expr>) -> Stmt {
    Stmt::Print(args)
}

pub fn draw(shape: &str, args: [&str; 6]) -> Stmt {
    Stmt::Draw {
        shape: shape.to_string(),
        args: args.map(str::to_string),
    }
}

pub fn asm(line: &str) -> Stmt {
    Stmt::Asm(line.to_string())
}

pub fn function(name: &str, body: Block) -> Stmt {
    Stmt::Function {
        name: name.to_string(),
        body,
    }
}

pub fn if_stmt(cond: Expr, then_body: Block) -> Stmt {
    Stmt::If {
        cond,
        then_body,
        else_body: None,
    }
}

pub fn if_else(cond: Expr, then_body: Block, else_body: Block) -> Stmt {
    Stmt::If {
        cond,
        then_body,
        else_body: Some(else_body),
    }
}

pub fn while_stmt(cond: Expr, body: Block) -> Stmt {
    Stmt::While { cond, body }
}

pub fn label(name: &str) -> Stmt {
    Stmt::Label(name.to_string())
}

pub fn goto(name: &str) -> Stmt {
    Stmt::Goto(name.to_string())
}
