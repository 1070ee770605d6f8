use soroban_sdk::{contracttype, Env, Symbol};

use crate::errors::StockdexError;

/// Protocol actions gated by the permission registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Swap,
    AddLiquidity,
    RemoveLiquidity,
    OpenPosition,
    ClosePosition,
    PnlWithdrawal,
    CollateralWithdrawal,
    SizeChange,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Swap,
        Operation::AddLiquidity,
        Operation::RemoveLiquidity,
        Operation::OpenPosition,
        Operation::ClosePosition,
        Operation::PnlWithdrawal,
        Operation::CollateralWithdrawal,
        Operation::SizeChange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Swap => "swap",
            Operation::AddLiquidity => "add_liquidity",
            Operation::RemoveLiquidity => "remove_liquidity",
            Operation::OpenPosition => "open_position",
            Operation::ClosePosition => "close_position",
            Operation::PnlWithdrawal => "pnl_withdrawal",
            Operation::CollateralWithdrawal => "collateral_withdrawal",
            Operation::SizeChange => "size_change",
        }
    }

    pub fn from_symbol(env: &Env, name: &Symbol) -> Result<Self, StockdexError> {
        Self::ALL
            .into_iter()
            .find(|op| Symbol::new(env, op.name()) == *name)
            .ok_or(StockdexError::UnknownAction)
    }
}

#[contracttype]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Permissions {
    pub allow_swap: bool,
    pub allow_add_liquidity: bool,
    pub allow_remove_liquidity: bool,
    pub allow_open_position: bool,
    pub allow_close_position: bool,
    pub allow_pnl_withdrawal: bool,
    pub allow_collateral_withdrawal: bool,
    pub allow_size_change: bool,
}

impl Permissions {
    pub fn uniform(value: bool) -> Self {
        Self {
            allow_swap: value,
            allow_add_liquidity: value,
            allow_remove_liquidity: value,
            allow_open_position: value,
            allow_close_position: value,
            allow_pnl_withdrawal: value,
            allow_collateral_withdrawal: value,
            allow_size_change: value,
        }
    }

    /// Looks up a flag by its action name. Names outside the fixed set are
    /// rejected rather than treated as disabled.
    pub fn get(&self, env: &Env, name: &Symbol) -> Result<bool, StockdexError> {
        Operation::from_symbol(env, name).map(|op| self.is_enabled(op))
    }

    pub fn is_enabled(&self, op: Operation) -> bool {
        match op {
            Operation::Swap => self.allow_swap,
            Operation::AddLiquidity => self.allow_add_liquidity,
            Operation::RemoveLiquidity => self.allow_remove_liquidity,
            Operation::OpenPosition => self.allow_open_position,
            Operation::ClosePosition => self.allow_close_position,
            Operation::PnlWithdrawal => self.allow_pnl_withdrawal,
            Operation::CollateralWithdrawal => self.allow_collateral_withdrawal,
            Operation::SizeChange => self.allow_size_change,
        }
    }

    /// Returns a copy with one flag replaced; `self` is left untouched.
    pub fn with_toggled(&self, op: Operation, value: bool) -> Self {
        let mut next = *self;
        let flag = match op {
            Operation::Swap => &mut next.allow_swap,
            Operation::AddLiquidity => &mut next.allow_add_liquidity,
            Operation::RemoveLiquidity => &mut next.allow_remove_liquidity,
            Operation::OpenPosition => &mut next.allow_open_position,
            Operation::ClosePosition => &mut next.allow_close_position,
            Operation::PnlWithdrawal => &mut next.allow_pnl_withdrawal,
            Operation::CollateralWithdrawal => &mut next.allow_collateral_withdrawal,
            Operation::SizeChange => &mut next.allow_size_change,
        };
        *flag = value;
        next
    }
}
