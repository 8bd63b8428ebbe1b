/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : RMSprop 优化器
 */

use super::base::Optimizer;
use super::state::{SlotStore, SquaredGrad};
use super::{OptimError, OptimizerState, ParamSet, RMSpropConfig};

const EPSILON: f32 = 1e-7;

/// RMSprop：以指数移动平均代替 AdaGrad 的梯度平方和，旧梯度的影响逐步衰减
///
/// - h = decay_rate * h + (1 - decay_rate) * ∇θ²
/// - θ = θ - α * ∇θ / (√h + 1e-7)
///
/// 学习率取0.001时效果通常最好。
#[derive(Debug, Clone, Default)]
pub struct RMSprop {
    config: RMSpropConfig,
    state: SlotStore<SquaredGrad>,
}

impl RMSprop {
    const NAME: &'static str = "RMSprop";

    /// 创建新的 RMSprop 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `decay_rate`: 平方梯度累积的衰减率，须在[0, 1)内
    pub fn new(lr: f32, decay_rate: f32) -> Result<Self, OptimError> {
        Self::from_config(RMSpropConfig { lr, decay_rate })
    }

    /// 使用缺省超参数（lr=0.001, decay_rate=0.99）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: RMSpropConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &RMSpropConfig {
        &self.config
    }
}

impl Optimizer for RMSprop {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let RMSpropConfig { lr, decay_rate } = self.config;
        for (param, grad, SquaredGrad { h }) in self.state.zip_mut(params, grads) {
            *h *= decay_rate;
            *h += &(grad * (1.0 - decay_rate) * grad);
            *param -= &((grad * lr) / (h.sqrt() + EPSILON));
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
