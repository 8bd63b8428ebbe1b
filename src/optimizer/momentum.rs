/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Momentum 优化器
 */

use super::base::Optimizer;
use super::state::{SlotStore, Velocity};
use super::{MomentumConfig, OptimError, OptimizerState, ParamSet};

/// 动量 SGD（Momentum SGD）
///
/// - v = momentum * v - α * ∇θ
/// - θ = θ + v
#[derive(Debug, Clone, Default)]
pub struct Momentum {
    config: MomentumConfig,
    state: SlotStore<Velocity>,
}

impl Momentum {
    const NAME: &'static str = "Momentum";

    /// 创建新的 Momentum 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `momentum`: 速度的衰减率，须在[0, 1)内
    pub fn new(lr: f32, momentum: f32) -> Result<Self, OptimError> {
        Self::from_config(MomentumConfig { lr, momentum })
    }

    /// 使用缺省超参数（lr=0.01, momentum=0.9）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: MomentumConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &MomentumConfig {
        &self.config
    }
}

impl Optimizer for Momentum {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let MomentumConfig { lr, momentum } = self.config;
        for (param, grad, Velocity { v }) in self.state.zip_mut(params, grads) {
            *v = &*v * momentum - grad * lr;
            *param += &*v;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn timestep(&self) -> u64 {
        self.state.step()
    }

    fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    fn state(&self) -> OptimizerState {
        self.state.snapshot()
    }

    fn load_state(&mut self, state: OptimizerState) -> Result<(), OptimError> {
        self.state.restore(Self::NAME, state, false)
    }
}
