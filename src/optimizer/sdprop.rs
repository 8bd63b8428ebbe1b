/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : SDProp 优化器
 *                 Adaptive Learning Rate via Covariance Matrix Based Preconditioning for Deep Neural Networks
 *                 (https://www.ijcai.org/proceedings/2017/0267.pdf)
 */

use super::base::{Optimizer, decay_pow};
use super::state::{MeanCovariance, SlotStore};
use super::{OptimError, OptimizerState, ParamSet, SDPropConfig};

const EPSILON: f32 = 1e-8;

/// SDProp：以梯度的（对角）协方差估计代替 RMSprop 的二阶矩做预条件
///
/// - c = γ * c + γ * (1 - γ) * (∇θ - m)²，其中 m 为**本步更新前**的均值
/// - m = γ * m + (1 - γ) * ∇θ
/// - 开启偏差修正时：t = t + 1，α_t = α * √(1 - γ^t)，θ = θ - α_t * ∇θ / (√c + 1e-8)
/// - 否则：θ = θ - α * ∇θ / (√c + 1e-8)
#[derive(Debug, Clone, Default)]
pub struct SDProp {
    config: SDPropConfig,
    state: SlotStore<MeanCovariance>,
}

impl SDProp {
    const NAME: &'static str = "SDProp";

    /// 创建新的 SDProp 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `gamma`: 均值与协方差估计的衰减率，须在[0, 1)内
    /// - `bias_correction`: 是否使用偏差修正学习率α_t
    pub fn new(lr: f32, gamma: f32, bias_correction: bool) -> Result<Self, OptimError> {
        Self::from_config(SDPropConfig {
            lr,
            gamma,
            bias_correction,
        })
    }

    /// 使用缺省超参数（lr=0.001, γ=0.99, 开启偏差修正）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: SDPropConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &SDPropConfig {
        &self.config
    }
}

impl Optimizer for SDProp {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let SDPropConfig {
            lr,
            gamma,
            bias_correction,
        } = self.config;
        let lr_t = if bias_correction {
            let t = self.state.advance();
            lr * (1.0 - decay_pow(gamma, t)).sqrt()
        } else {
            lr
        };
        log::trace!("{}: 第{}步，α_t={lr_t}", Self::NAME, self.state.step());

        for (param, grad, MeanCovariance { m, c }) in self.state.zip_mut(params, grads) {
            // c 须先于 m 更新：其中用到的是上一步的均值
            *c *= gamma;
            *c += &((grad - &*m).square() * (gamma * (1.0 - gamma)));
            *m *= gamma;
            *m += &(grad * (1.0 - gamma));
            *param -= &((grad * lr_t) / (c.sqrt() + EPSILON));
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
        self.state.restore(Self::NAME, state, self.config.bias_correction)
    }
}
