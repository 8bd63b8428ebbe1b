/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 张量相关的错误类型
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 数据长度与形状对不上
    #[error("数据长度{data_len}与形状{shape:?}所需的元素个数{expected_len}不一致")]
    DataShapeMismatch {
        data_len: usize,
        shape: Vec<usize>,
        expected_len: usize,
    },
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("张量不是标量，无法转化为纯数：形状为{0:?}")]
    NotScalar(Vec<usize>),
}
