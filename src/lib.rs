//! # Only Optim
//!
//! `only_optim`用纯rust实现了[pytorch](https://pytorch.org)风格的一族一阶随机优化算法：
//! SGD、Momentum、Nesterov、AdaGrad、RMSprop、Adam、SDProp 与 AdaStandard。
//! 每个优化器在首次`update`时按参数的键和形状惰性分配累积状态，此后每步严格按各自的
//! 递推公式原地更新参数。
//!
//! ```ignore
//! use only_optim::optimizer::{Adam, Optimizer, ParamSet};
//! use only_optim::tensor::Tensor;
//!
//! let mut params = ParamSet::from([("w".to_string(), Tensor::new(&[1.0, 2.0], &[2]))]);
//! let grads = ParamSet::from([("w".to_string(), Tensor::new(&[0.1, -0.2], &[2]))]);
//! let mut optimizer = Adam::new_default();
//! optimizer.update(&mut params, &grads)?;
//! ```

pub mod errors;
pub mod optimizer;
pub mod tensor;
pub mod utils;
