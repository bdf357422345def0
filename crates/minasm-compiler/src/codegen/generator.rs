//! The `Codegen` walker: statement and expression emission.

use indexmap::IndexMap;
use minasm_mlog::names::{
    ACC, DISPLAY_SINK, MESSAGE_SINK, NULL, REG_B, REG_C, REG_D, SPILL_BANK, STACK_PTR,
};
use minasm_mlog::{Instruction, JumpCond, JumpTarget, Op};

use crate::ast::{AssignOp, Block, Expr, Program, Stmt, UnaryOp};

use super::error::CodegenError;

/// Code generator state for one compilation run.
///
/// Owns the synthesized-label counter and the function table. Both are
/// instance state scoped to a single run; a fresh compilation takes a fresh
/// `Codegen`, so repeated compilations stay independent and deterministic.
pub struct Codegen {
    pub(super) code: Vec<Instruction>,
    /// Function name → fully compiled body. Later declarations of the same
    /// name overwrite earlier ones.
    pub(super) functions: IndexMap<String, Vec<Instruction>>,
    pub(super) next_label_id: u32,
}

impl Codegen {
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            functions: IndexMap::new(),
            next_label_id: 0,
        }
    }

    /// Compile a whole program: register-zeroing preamble, the top-level
    /// statements in order, then the terminating `end`.
    pub fn compile_program(mut self, program: &Program) -> Result<Vec<Instruction>, CodegenError> {
        for reg in [STACK_PTR, ACC, REG_B, REG_C, REG_D] {
            self.code.push(Instruction::Set {
                dst: reg.to_string(),
                value: "0".to_string(),
            });
        }
        self.compile_block(&program.stmts)?;
        self.code.push(Instruction::End);
        Ok(self.code)
    }

    /// Fresh id from the shared counter. Synthesized labels stay unique
    /// across siblings and arbitrary nesting depth.
    fn fresh_uid(&mut self) -> u32 {
        let id = self.next_label_id;
        self.next_label_id += 1;
        id
    }

    pub(super) fn compile_block(&mut self, block: &Block) -> Result<(), CodegenError> {
        for stmt in block {
            self.compile_stmt(stmt)?;
        }
        Ok(())
    }

    pub(super) fn compile_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Expr(expr) => self.compile_expr(expr),
            Stmt::Print(args) => self.compile_print(args),
            Stmt::Draw { shape, args } => {
                self.code.push(Instruction::Draw {
                    shape: shape.clone(),
                    args: args.clone(),
                });
                Ok(())
            }
            Stmt::DrawFlush => {
                self.code
                    .push(Instruction::DrawFlush(DISPLAY_SINK.to_string()));
                Ok(())
            }
            Stmt::Asm(line) => {
                self.code
                    .push(Instruction::Verbatim(strip_quotes(line).to_string()));
                Ok(())
            }
            Stmt::Function { name, body } => self.compile_function(name, body),
            Stmt::If {
                cond,
                then_body,
                else_body,
            } => self.compile_if(cond, then_body, else_body.as_ref()),
            Stmt::Label(name) => {
                self.code.push(Instruction::Label(name.clone()));
                Ok(())
            }
            Stmt::Goto(name) => {
                self.jump_always(name.clone());
                Ok(())
            }
            Stmt::While { cond, body } => self.compile_while(cond, body),
        }
    }

    /// Compile `expr`, leaving its result in the accumulator.
    pub(super) fn compile_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Literal(text) | Expr::Ident(text) => {
                self.code.push(Instruction::Set {
                    dst: ACC.to_string(),
                    value: text.clone(),
                });
                Ok(())
            }
            Expr::Paren(inner) => self.compile_expr(inner),
            Expr::Call(name) => self.inline_call(name),
            Expr::Sensor { entity, attr } => {
                self.code.push(Instruction::Sensor {
                    dst: ACC.to_string(),
                    entity: entity.clone(),
                    attr: attr.clone(),
                });
                Ok(())
            }
            Expr::Unary { op, operand } => self.compile_unary(*op, operand),
            Expr::Binary { op, lhs, rhs } => self.compile_binary(op.mnemonic(), lhs, rhs, ACC),
            Expr::Assign { target, value } => self.compile_assign(target, value),
            Expr::AssignOp { target, op, value } => self.compile_self_assign(target, *op, value),
        }
    }

    fn compile_unary(&mut self, op: UnaryOp, operand: &Expr) -> Result<(), CodegenError> {
        let arg = match operand.as_atom() {
            Some(text) => text.to_string(),
            None => {
                self.compile_expr(operand)?;
                ACC.to_string()
            }
        };
        let instr = match op {
            UnaryOp::Neg => Instruction::Op {
                op: Op::Mul,
                dst: ACC.to_string(),
                a: "-1".to_string(),
                b: arg,
            },
            UnaryOp::BitNot => Instruction::Op {
                op: Op::Not,
                dst: ACC.to_string(),
                a: arg,
                b: NULL.to_string(),
            },
        };
        self.code.push(instr);
        Ok(())
    }

    /// The four-case binary algorithm. `dst` is the accumulator for plain
    /// binary expressions and the assigned variable under assignment folding.
    fn compile_binary(
        &mut self,
        op: Op,
        lhs: &Expr,
        rhs: &Expr,
        dst: &str,
    ) -> Result<(), CodegenError> {
        let (a, b) = match (lhs.as_atom(), rhs.as_atom()) {
            (Some(left), Some(right)) => (left.to_string(), right.to_string()),
            (Some(left), None) => {
                let left = left.to_string();
                self.compile_expr(rhs)?;
                (left, ACC.to_string())
            }
            (None, Some(right)) => {
                let right = right.to_string();
                self.compile_expr(lhs)?;
                (ACC.to_string(), right)
            }
            (None, None) => {
                self.compile_expr(lhs)?;
                self.spill_push(ACC);
                self.compile_expr(rhs)?;
                self.spill_pop(REG_B);
                (REG_B.to_string(), ACC.to_string())
            }
        };
        self.code.push(Instruction::Op {
            op,
            dst: dst.to_string(),
            a,
            b,
        });
        Ok(())
    }

    fn compile_assign(&mut self, target: &str, value: &Expr) -> Result<(), CodegenError> {
        if let Some(text) = value.as_atom() {
            self.code.push(Instruction::Set {
                dst: target.to_string(),
                value: text.to_string(),
            });
            return Ok(());
        }
        // Folding applies only when the right-hand side is exactly a binary
        // node; a parenthesized one compiles through the accumulator.
        if let Expr::Binary { op, lhs, rhs } = value {
            return self.compile_binary(op.mnemonic(), lhs, rhs, target);
        }
        self.compile_expr(value)?;
        self.code.push(Instruction::Set {
            dst: target.to_string(),
            value: ACC.to_string(),
        });
        Ok(())
    }

    fn compile_self_assign(
        &mut self,
        target: &str,
        op: AssignOp,
        value: &Expr,
    ) -> Result<(), CodegenError> {
        let arg = match value.as_atom() {
            Some(text) => text.to_string(),
            None => {
                self.compile_expr(value)?;
                ACC.to_string()
            }
        };
        let op = match op {
            AssignOp::AddAssign => Op::Add,
            AssignOp::SubAssign => Op::Sub,
        };
        self.code.push(Instruction::Op {
            op,
            dst: target.to_string(),
            a: target.to_string(),
            b: arg,
        });
        Ok(())
    }

    /// Splice a copy of the named function's compiled body at the call site.
    fn inline_call(&mut self, name: &str) -> Result<(), CodegenError> {
        let body = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| CodegenError::UnknownFunction(name.to_string()))?;
        self.code.extend(body);
        Ok(())
    }

    /// Compile the body into the function table; the declaration itself
    /// emits nothing.
    fn compile_function(&mut self, name: &str, body: &Block) -> Result<(), CodegenError> {
        let saved = std::mem::take(&mut self.code);
        self.compile_block(body)?;
        let compiled = std::mem::replace(&mut self.code, saved);
        self.functions.insert(name.to_string(), compiled);
        Ok(())
    }

    fn compile_print(&mut self, args: &[Expr]) -> Result<(), CodegenError> {
        for arg in args {
            match arg.as_atom() {
                Some(text) => self.code.push(Instruction::Print(text.to_string())),
                None => {
                    self.compile_expr(arg)?;
                    self.code.push(Instruction::Print(ACC.to_string()));
                }
            }
        }
        self.code
            .push(Instruction::PrintFlush(MESSAGE_SINK.to_string()));
        Ok(())
    }

    /// Branch-on-zero: the true block runs only when the condition evaluated
    /// non-zero. An if/else pair shares one counter id across its two labels.
    fn compile_if(
        &mut self,
        cond: &Expr,
        then_body: &Block,
        else_body: Option<&Block>,
    ) -> Result<(), CodegenError> {
        self.compile_expr(cond)?;
        let uid = self.fresh_uid();
        let if_label = format!(".ifLbl{uid}");
        self.jump_on_zero(if_label.clone());
        self.compile_block(then_body)?;
        match else_body {
            None => self.code.push(Instruction::Label(if_label)),
            Some(else_body) => {
                let cont_label = format!(".contLbl{uid}");
                self.jump_always(cont_label.clone());
                self.code.push(Instruction::Label(if_label));
                self.compile_block(else_body)?;
                self.code.push(Instruction::Label(cont_label));
            }
        }
        Ok(())
    }

    fn compile_while(&mut self, cond: &Expr, body: &Block) -> Result<(), CodegenError> {
        let uid = self.fresh_uid();
        let while_label = format!(".whileLbl{uid}");
        let cont_label = format!(".contLbl{uid}");
        self.code.push(Instruction::Label(while_label.clone()));
        self.compile_expr(cond)?;
        self.jump_on_zero(cont_label.clone());
        self.compile_block(body)?;
        self.jump_always(while_label);
        self.code.push(Instruction::Label(cont_label));
        Ok(())
    }

    /// Save `reg` on the spill stack: write at the stack pointer, then bump.
    fn spill_push(&mut self, reg: &str) {
        self.code.push(Instruction::Write {
            value: reg.to_string(),
            bank: SPILL_BANK.to_string(),
            addr: STACK_PTR.to_string(),
        });
        self.code.push(Instruction::Op {
            op: Op::Add,
            dst: STACK_PTR.to_string(),
            a: STACK_PTR.to_string(),
            b: "1".to_string(),
        });
    }

    /// Reload the most recently spilled value into `reg`.
    fn spill_pop(&mut self, reg: &str) {
        self.code.push(Instruction::Op {
            op: Op::Sub,
            dst: STACK_PTR.to_string(),
            a: STACK_PTR.to_string(),
            b: "1".to_string(),
        });
        self.code.push(Instruction::Read {
            dst: reg.to_string(),
            bank: SPILL_BANK.to_string(),
            addr: STACK_PTR.to_string(),
        });
    }

    fn jump_on_zero(&mut self, label: String) {
        self.code.push(Instruction::Jump {
            target: JumpTarget::Symbolic(label),
            cond: JumpCond::Equal,
            a: ACC.to_string(),
            b: "0".to_string(),
        });
    }

    fn jump_always(&mut self, label: String) {
        self.code.push(Instruction::Jump {
            target: JumpTarget::Symbolic(label),
            cond: JumpCond::Always,
            a: NULL.to_string(),
            b: NULL.to_string(),
        });
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the surrounding quotes of an inline-assembly payload.
fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
